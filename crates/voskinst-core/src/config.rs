//! Installer configuration.

use crate::copy::DEFAULT_BUFFER_SIZE;

/// Tunables for [`ArchiveInstaller`](crate::ArchiveInstaller).
///
/// # Examples
///
/// ```
/// use voskinst_core::InstallConfig;
///
/// let config = InstallConfig::default().with_buffer_size(64 * 1024);
/// assert_eq!(config.buffer_size, 65536);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// Size in bytes of the buffer used to stream each file entry.
    ///
    /// A value of zero is treated as one.
    pub buffer_size: usize,
}

impl Default for InstallConfig {
    /// Default values:
    /// - `buffer_size`: 1 KiB
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl InstallConfig {
    /// Sets the transfer buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}
