//! Where staged and installed models live on disk.

use std::path::Path;
use std::path::PathBuf;

use crate::Locale;

/// Name of the staging directory under a [`StorageLayout`] root.
pub const STAGING_DIR_NAME: &str = "unzip-staging";

/// Name of the models directory under a [`StorageLayout`] root.
pub const MODELS_DIR_NAME: &str = "models";

/// Path-resolution policy consulted by the installer.
///
/// The staging directory and every destination should live on the same
/// filesystem, since relocation is done with renames.
pub trait PathPolicy {
    /// Directory the archive is unpacked into before relocation.
    fn staging_dir(&self) -> PathBuf;

    /// Final directory for models of `locale`.
    fn destination_for(&self, locale: &Locale) -> PathBuf;
}

impl<T: PathPolicy + ?Sized> PathPolicy for &T {
    fn staging_dir(&self) -> PathBuf {
        (**self).staging_dir()
    }

    fn destination_for(&self, locale: &Locale) -> PathBuf {
        (**self).destination_for(locale)
    }
}

/// Layout rooted at an application data directory.
///
/// ```text
/// <root>/unzip-staging/           staging
/// <root>/models/<language-tag>/   one directory per locale
/// ```
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use voskinst_core::{Locale, PathPolicy, StorageLayout};
///
/// let layout = StorageLayout::new("/data/app");
/// let locale = Locale::from_language_tag("en-us");
/// assert_eq!(
///     layout.destination_for(&locale),
///     Path::new("/data/app/models/en-US")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    /// Creates a layout under `root`. Nothing is created on disk.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Application data root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one subdirectory per locale.
    #[must_use]
    pub fn models_dir(&self) -> PathBuf {
        self.root.join(MODELS_DIR_NAME)
    }
}

impl PathPolicy for StorageLayout {
    fn staging_dir(&self) -> PathBuf {
        self.root.join(STAGING_DIR_NAME)
    }

    fn destination_for(&self, locale: &Locale) -> PathBuf {
        self.models_dir().join(locale.to_language_tag())
    }
}
