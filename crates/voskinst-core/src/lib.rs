//! Locale-aware installer for zipped Vosk speech models.
//!
//! `voskinst-core` unpacks a model archive into a staging directory, works
//! out which locale the model is for (from the caller or from the archive's
//! entry names), and moves the result into a per-locale directory. It also
//! lists and removes installed models.
//!
//! # Examples
//!
//! ```no_run
//! use voskinst_core::{Locale, NoopProgress, StorageLayout, install_archive};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = StorageLayout::new("/data/voskinst");
//! let report = install_archive(
//!     "vosk-model-small-en-us-0.22.zip",
//!     &layout,
//!     Locale::root(),
//!     &mut NoopProgress,
//! )?;
//! println!("{} model in {}", report.locale, report.destination.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod fs;
pub mod installer;
pub mod layout;
pub mod locale;
pub mod report;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API types
pub use api::install_archive;
pub use catalog::InstalledModel;
pub use config::InstallConfig;
pub use error::ErrorKind;
pub use error::InstallError;
pub use error::Result;
pub use installer::ArchiveInstaller;
pub use layout::PathPolicy;
pub use layout::StorageLayout;
pub use locale::Locale;
pub use locale::ParseLocaleError;
pub use report::InstallReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::Relocation;
