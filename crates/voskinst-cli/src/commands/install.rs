//! Install command implementation.

use crate::cli::InstallArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use std::path::Path;
use voskinst_core::ArchiveInstaller;
use voskinst_core::NoopProgress;
use voskinst_core::StorageLayout;

pub fn execute(
    args: &InstallArgs,
    data_dir: &Path,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let installer = ArchiveInstaller::new(StorageLayout::new(data_dir));
    let locale = args.locale.clone().unwrap_or_default();

    // Use progress bar if TTY is detected (not quiet, not JSON, is terminal)
    let report = if show_progress && CliProgress::should_show() {
        let mut progress = CliProgress::new("Installing");
        add_archive_context(
            installer.install(&args.archive, locale, &mut progress),
            &args.archive,
        )?
    } else {
        add_archive_context(
            installer.install(&args.archive, locale, &mut NoopProgress),
            &args.archive,
        )?
    };

    if report.stale_staging_removed {
        formatter.format_warning("removed leftovers of an interrupted install");
    }
    formatter.format_install_result(&args.archive, &report)?;

    Ok(())
}
