//! Error types for model installation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `InstallError`.
pub type Result<T> = std::result::Result<T, InstallError>;

/// Coarse classification of an [`InstallError`].
///
/// Callers that only need to decide how to present a failure can match on
/// the kind instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The archive could not be opened, parsed, or contains unusable names.
    Archive,
    /// Reading an entry or writing into the staging directory failed.
    Io,
    /// Moving the staged model into its destination failed.
    Install,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Archive => f.write_str("archive error"),
            Self::Io => f.write_str("I/O error"),
            Self::Install => f.write_str("install error"),
        }
    }
}

/// Errors that can occur while installing a model archive.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The archive file could not be opened.
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen {
        /// Archive path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The archive is not a readable zip container.
    #[error("invalid archive {path}: {source}")]
    InvalidArchive {
        /// Archive path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: zip::result::ZipError,
    },

    /// An entry name is absolute or climbs out of the staging directory.
    #[error("unsafe entry name in archive: {name}")]
    UnsafeEntryName {
        /// Raw entry name as stored in the archive.
        name: String,
    },

    /// An entry could not be opened for reading.
    #[error("cannot read archive entry #{index}: {source}")]
    EntryRead {
        /// Zero-based index of the entry in archive order.
        index: usize,
        /// Underlying error.
        #[source]
        source: zip::result::ZipError,
    },

    /// Streaming data to or from the filesystem failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read, written or removed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be created.
    #[error("cannot create directory {path}: {source}")]
    CreateDirectory {
        /// Directory path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Moving staged content into the destination failed.
    #[error("cannot move {from} to {to}: {source}")]
    Relocate {
        /// Source path inside the staging directory.
        from: PathBuf,
        /// Target path inside or at the destination.
        to: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// No installed model matches the request.
    #[error("model not found: {path}")]
    ModelNotFound {
        /// Expected model directory.
        path: PathBuf,
    },
}

impl InstallError {
    /// Returns the coarse kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use voskinst_core::{ErrorKind, InstallError};
    ///
    /// let err = InstallError::UnsafeEntryName {
    ///     name: "../escape".into(),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::Archive);
    ///
    /// let err = InstallError::ModelNotFound {
    ///     path: PathBuf::from("models/en-US/missing"),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::Install);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ArchiveOpen { .. } | Self::InvalidArchive { .. } | Self::UnsafeEntryName { .. } => {
                ErrorKind::Archive
            }
            Self::EntryRead { .. } | Self::Io { .. } | Self::CreateDirectory { .. } => {
                ErrorKind::Io
            }
            Self::Relocate { .. } | Self::ModelNotFound { .. } => ErrorKind::Install,
        }
    }

    /// Returns `true` if the archive itself was the problem.
    #[must_use]
    pub const fn is_archive_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Archive)
    }

    /// Returns `true` if the failure happened while relocating staged files.
    #[must_use]
    pub const fn is_install_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Install)
    }

    /// Returns the filesystem path most relevant to this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ArchiveOpen { path, .. }
            | Self::InvalidArchive { path, .. }
            | Self::Io { path, .. }
            | Self::CreateDirectory { path, .. }
            | Self::ModelNotFound { path } => Some(path),
            Self::Relocate { to, .. } => Some(to),
            Self::UnsafeEntryName { .. } | Self::EntryRead { .. } => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub(crate) fn create_dir(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::CreateDirectory { path, source }
    }
}
