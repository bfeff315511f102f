//! Error conversion utilities for CLI.
//!
//! Converts voskinst-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use voskinst_core::InstallError;

/// Converts `InstallError` to user-friendly anyhow error with context
pub fn convert_install_error(err: InstallError, archive: &Path) -> anyhow::Error {
    match err {
        InstallError::ArchiveOpen { path, source } => {
            anyhow!(
                "Cannot open archive '{}': {}\n\
                 HINT: Check that the file exists and is readable.",
                path.display(),
                source
            )
        }
        InstallError::InvalidArchive { path, source } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The download may be incomplete or corrupted. Fetch the model again.",
                path.display(),
                source
            )
        }
        InstallError::UnsafeEntryName { name } => {
            anyhow!(
                "Archive '{}' contains an entry outside its own tree: '{}'\n\
                 HINT: This archive was not produced by the Vosk project. Do not install it.",
                archive.display(),
                name
            )
        }
        InstallError::Relocate { from, to, source } => {
            anyhow!(
                "Extracted '{}' but could not move '{}' to '{}': {}\n\
                 HINT: The destination may already contain a model with the same name. \
                 Remove it with `voskinst remove` and try again.",
                archive.display(),
                from.display(),
                to.display(),
                source
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error installing archive '{}'", archive.display())),
    }
}

/// Converts an `InstallError` raised while removing the model at `model`
pub fn convert_remove_error(err: InstallError, model: &Path) -> anyhow::Error {
    match err {
        InstallError::ModelNotFound { path } => {
            anyhow!(
                "No model installed at '{}'\n\
                 HINT: Run `voskinst list` to see installed models.",
                path.display()
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error removing model '{}'", model.display())),
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, InstallError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_install_error(e, archive))
}
