//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use crate::progress::humanize_bytes;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use voskinst_core::InstallReport;
use voskinst_core::InstalledModel;
use voskinst_core::Relocation;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn describe_relocation(relocation: Relocation) -> String {
        match relocation {
            Relocation::Renamed => "new directory".to_string(),
            Relocation::Merged { moved } => format!("merged {moved} item(s) into existing directory"),
        }
    }

    fn write_success(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_install_result(&self, archive: &Path, report: &InstallReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_success(&format!("Installed {}", archive.display()));

        let source = if report.locale_detected {
            "detected"
        } else {
            "requested"
        };
        let _ = self
            .term
            .write_line(&format!("  Locale: {} ({source})", report.locale));
        let _ = self.term.write_line(&format!(
            "  Destination: {}",
            report.destination.display()
        ));
        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            humanize_bytes(report.bytes_written)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Entries: {}", report.entries));
            let _ = self
                .term
                .write_line(&format!("  Directories: {}", report.directories_created));
            let _ = self.term.write_line(&format!(
                "  Relocation: {}",
                Self::describe_relocation(report.relocation)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_models(&self, models: &[InstalledModel]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if models.is_empty() {
            let _ = self.term.write_line("No models installed");
            return Ok(());
        }

        let width = models
            .iter()
            .map(|model| model.locale.to_string().len())
            .max()
            .unwrap_or(0);

        for model in models {
            let locale = model.locale.to_string();
            if self.verbose {
                let _ = self.term.write_line(&format!(
                    "{locale:<width$}  {}  {}",
                    model.name,
                    model.path.display()
                ));
            } else {
                let _ = self
                    .term
                    .write_line(&format!("{locale:<width$}  {}", model.name));
            }
        }

        Ok(())
    }

    fn format_removed(&self, model: &InstalledModel) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_success(&format!("Removed {} ({})", model.name, model.locale));
        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:#}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:#}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
