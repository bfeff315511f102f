//! High-level public API for model installation.

use std::path::Path;

use crate::ArchiveInstaller;
use crate::InstallReport;
use crate::Locale;
use crate::PathPolicy;
use crate::ProgressCallback;
use crate::Result;

/// Installs a model archive with default configuration.
///
/// Shorthand for [`ArchiveInstaller::new`] followed by
/// [`ArchiveInstaller::install`].
///
/// # Arguments
///
/// * `archive_path` - Path to the zip archive
/// * `policy` - Where staging and destination directories live
/// * `locale` - Target locale, or [`Locale::root()`] to infer it
/// * `progress` - Receives `index / total` before each entry
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or is not a zip file
/// - An entry cannot be read or written
/// - The staged model cannot be moved into place
///
/// # Examples
///
/// ```no_run
/// use voskinst_core::{Locale, StorageLayout, install_archive};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let layout = StorageLayout::new("/data/voskinst");
/// let report = install_archive(
///     "vosk-model-small-de-de-0.15.zip",
///     &layout,
///     Locale::root(),
///     &mut |fraction: f64| println!("{:.0}%", fraction * 100.0),
/// )?;
/// println!("installed into {}", report.destination.display());
/// # Ok(())
/// # }
/// ```
pub fn install_archive<A: AsRef<Path>, P: PathPolicy>(
    archive_path: A,
    policy: P,
    locale: Locale,
    progress: &mut dyn ProgressCallback,
) -> Result<InstallReport> {
    ArchiveInstaller::new(policy).install(archive_path, locale, progress)
}
