//! The archive installer.

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::InstallConfig;
use crate::InstallError;
use crate::InstallReport;
use crate::Locale;
use crate::PathPolicy;
use crate::ProgressCallback;
use crate::Result;
use crate::extraction::ExtractionEngine;
use crate::extraction::relocate;
use crate::fs::delete_recursive;

/// Installs zipped models into per-locale directories.
///
/// Each call owns the staging directory returned by the policy for its whole
/// duration; two installs sharing a policy must not run at the same time.
///
/// # Examples
///
/// ```no_run
/// use voskinst_core::{ArchiveInstaller, Locale, NoopProgress, StorageLayout};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let installer = ArchiveInstaller::new(StorageLayout::new("/data/voskinst"));
/// let report = installer.install(
///     "vosk-model-small-en-us-0.22.zip",
///     Locale::root(),
///     &mut NoopProgress,
/// )?;
/// println!("installed {} into {}", report.locale, report.destination.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveInstaller<P> {
    policy: P,
    config: InstallConfig,
}

impl<P: PathPolicy> ArchiveInstaller<P> {
    /// Creates an installer with default configuration.
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self::with_config(policy, InstallConfig::default())
    }

    /// Creates an installer with the given configuration.
    #[must_use]
    pub fn with_config(policy: P, config: InstallConfig) -> Self {
        Self { policy, config }
    }

    /// Returns the path policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// Extracts `archive` and moves it into the directory for its locale.
    ///
    /// Pass [`Locale::root()`] to infer the locale from entry names. The
    /// steps are:
    ///
    /// 1. remove a staging directory left by an earlier run,
    /// 2. unpack every entry into staging, reporting progress before each,
    /// 3. resolve the destination from the final locale,
    /// 4. rename staging onto a missing destination, or move its top-level
    ///    items into an existing one.
    ///
    /// # Errors
    ///
    /// Fails fast on the first problem, with no retries and no rollback:
    /// archive errors before extraction starts, I/O errors at the failing
    /// entry, [`InstallError::Relocate`] if the final move fails. Leftover
    /// staging content is cleaned up by the next call.
    pub fn install<A: AsRef<Path>>(
        &self,
        archive: A,
        locale: Locale,
        progress: &mut dyn ProgressCallback,
    ) -> Result<InstallReport> {
        let start = Instant::now();
        let archive = archive.as_ref();
        let staging = self.policy.staging_dir();

        let stale_staging_removed =
            delete_recursive(&staging).map_err(InstallError::io(&staging))?;
        if stale_staging_removed {
            warn!(staging = %staging.display(), "removed staging directory left by an earlier run");
        }

        debug!(archive = %archive.display(), locale = %locale, "extracting");
        let staged = ExtractionEngine::new(&self.config).stage(archive, &staging, locale, progress)?;

        let destination = self.policy.destination_for(&staged.locale);
        debug!(destination = %destination.display(), "extraction finished, moving into place");
        let relocation = relocate(&staging, &destination)?;
        progress.on_complete();

        let report = InstallReport {
            destination,
            locale: staged.locale,
            locale_detected: staged.locale_detected,
            entries: staged.entries,
            files_extracted: staged.files_extracted,
            directories_created: staged.directories_created,
            bytes_written: staged.bytes_written,
            relocation,
            stale_staging_removed,
            duration: start.elapsed(),
        };
        info!(
            locale = %report.locale,
            destination = %report.destination.display(),
            files = report.files_extracted,
            bytes = report.bytes_written,
            "model installed"
        );
        Ok(report)
    }
}
