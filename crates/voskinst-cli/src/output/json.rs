//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::ModelOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use voskinst_core::InstallReport;
use voskinst_core::InstalledModel;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct InstallOutput {
    archive: String,
    destination: String,
    locale: String,
    locale_detected: bool,
    entries: usize,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    merged: bool,
    stale_staging_removed: bool,
    duration_ms: u128,
}

impl InstallOutput {
    fn new(archive: &Path, report: &InstallReport) -> Self {
        Self {
            archive: archive.display().to_string(),
            destination: report.destination.display().to_string(),
            locale: report.locale.to_string(),
            locale_detected: report.locale_detected,
            entries: report.entries,
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            merged: report.merged(),
            stale_staging_removed: report.stale_staging_removed,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_install_result(&self, archive: &Path, report: &InstallReport) -> Result<()> {
        let output = JsonOutput::success("install", InstallOutput::new(archive, report));
        Self::output(&output)
    }

    fn format_models(&self, models: &[InstalledModel]) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput {
            models: Vec<ModelOutput>,
        }

        let data = ListOutput {
            models: models.iter().map(ModelOutput::from).collect(),
        };

        Self::output(&JsonOutput::success("list", data))
    }

    fn format_removed(&self, model: &InstalledModel) -> Result<()> {
        Self::output(&JsonOutput::success("remove", ModelOutput::from(model)))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        // Warnings would break the single JSON document on stdout.
        tracing::warn!("{message}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use voskinst_core::Locale;
    use voskinst_core::Relocation;

    #[test]
    fn test_install_output_fields() {
        let report = InstallReport {
            destination: PathBuf::from("data/models/en-US"),
            locale: Locale::from_language_tag("en-us"),
            locale_detected: true,
            entries: 5,
            files_extracted: 3,
            directories_created: 2,
            bytes_written: 2048,
            relocation: Relocation::Merged { moved: 1 },
            stale_staging_removed: false,
            duration: Duration::from_millis(12),
        };

        let output = JsonOutput::success("install", InstallOutput::new(Path::new("m.zip"), &report));
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["locale"], "en-US");
        assert_eq!(json["data"]["merged"], true);
        assert_eq!(json["data"]["duration_ms"], 12);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_output_has_no_data() {
        let output = JsonOutput::error("install", "boom");
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }
}
