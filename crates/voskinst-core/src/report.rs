//! Install reporting and progress callbacks.

use std::path::PathBuf;
use std::time::Duration;

use crate::Locale;

/// How the staged tree reached its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// The destination did not exist and the staging directory was renamed
    /// onto it.
    Renamed,
    /// The destination already existed; each top-level staged item was moved
    /// into it.
    Merged {
        /// Number of top-level items moved.
        moved: usize,
    },
}

/// Report of a successful install.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Directory the model was installed into.
    pub destination: PathBuf,

    /// Locale the destination was resolved from.
    pub locale: Locale,

    /// `true` if the locale was inferred from entry names.
    pub locale_detected: bool,

    /// Number of entries in the archive.
    pub entries: usize,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// How the staged tree was moved into place.
    pub relocation: Relocation,

    /// `true` if a staging directory left by an earlier run was removed.
    pub stale_staging_removed: bool,

    /// Wall-clock duration of the install.
    pub duration: Duration,
}

impl InstallReport {
    /// Returns `true` if the install merged into an existing directory.
    #[must_use]
    pub const fn merged(&self) -> bool {
        matches!(self.relocation, Relocation::Merged { .. })
    }
}

/// Callback trait for progress reporting during installs.
///
/// Any `FnMut(f64) + Send` closure is a progress callback.
///
/// # Examples
///
/// ```
/// use voskinst_core::ProgressCallback;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_progress(&mut self, fraction: f64) {
///         println!("{:.0}%", fraction * 100.0);
///     }
/// }
///
/// let mut seen = Vec::new();
/// let mut record = |fraction: f64| seen.push(fraction);
/// record.on_progress(0.5);
/// assert_eq!(seen, vec![0.5]);
/// ```
pub trait ProgressCallback: Send {
    /// Called before each entry with `index / total`, so values lie in
    /// `[0, 1)` and the first call reports `0.0`.
    fn on_progress(&mut self, fraction: f64);

    /// Called after each file entry with the number of bytes it produced.
    fn on_bytes_written(&mut self, _bytes: u64) {}

    /// Called once after the model was moved into place.
    fn on_complete(&mut self) {}
}

impl<F> ProgressCallback for F
where
    F: FnMut(f64) + Send,
{
    fn on_progress(&mut self, fraction: f64) {
        self(fraction);
    }
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_progress(&mut self, _fraction: f64) {}
}
