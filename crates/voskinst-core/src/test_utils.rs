//! Test utilities for building model archives in memory.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from a list of (path, content) entries.
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ZipTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build()
}

/// Builds a small Vosk-style model archive for `tag`, e.g. `en-us`.
///
/// The top-level directory is `vosk-model-small-<tag>-0.22/`.
#[must_use]
pub fn create_model_zip(tag: &str) -> Vec<u8> {
    let root = format!("vosk-model-small-{tag}-0.22");
    ZipTestBuilder::new()
        .add_directory(&format!("{root}/"))
        .add_file(&format!("{root}/README"), b"small model")
        .add_directory(&format!("{root}/am/"))
        .add_file(&format!("{root}/am/final.mdl"), &[0x5a; 2048])
        .add_file(&format!("{root}/conf/model.conf"), b"--sample-frequency=16000")
        .build()
}

/// Builder for ZIP test archives with files and directories.
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored regular file.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a deflated regular file.
    #[must_use]
    pub fn add_deflated_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_zip() {
        let zip_data = create_test_zip(vec![("file.txt", b"hello")]);
        let archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_model_zip_layout() {
        let mut archive = zip::ZipArchive::new(Cursor::new(create_model_zip("fr-fr"))).unwrap();
        assert_eq!(archive.len(), 5);
        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "vosk-model-small-fr-fr-0.22/");
        assert!(first.is_dir());
    }
}
