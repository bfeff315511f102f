//! Streaming a zip archive into the staging directory.

use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::trace;

use crate::InstallConfig;
use crate::InstallError;
use crate::Locale;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::locale::detect_locale;

/// What ended up in the staging directory.
#[derive(Debug, Clone, Default)]
pub struct StagedArchive {
    /// Requested locale, or the first one inferred from entry names.
    pub locale: Locale,
    /// `true` if `locale` was inferred.
    pub locale_detected: bool,
    /// Number of entries in the archive.
    pub entries: usize,
    /// Number of files written.
    pub files_extracted: usize,
    /// Number of directory entries created.
    pub directories_created: usize,
    /// Total bytes written.
    pub bytes_written: u64,
}

/// Extracts archives entry by entry through a reusable transfer buffer.
#[derive(Debug)]
pub struct ExtractionEngine {
    buffer: CopyBuffer,
}

impl ExtractionEngine {
    /// Creates an engine with the buffer size from `config`.
    #[must_use]
    pub fn new(config: &InstallConfig) -> Self {
        Self {
            buffer: CopyBuffer::with_size(config.effective_buffer_size()),
        }
    }

    /// Unpacks `archive_path` into `staging`.
    ///
    /// Entries are processed in archive order. Before each entry `progress`
    /// receives `index / total`. While `locale` is root every entry name is
    /// tried against the model name pattern; the first hit is kept for the
    /// rest of the archive.
    ///
    /// `staging` is created if missing. On error it is left as is.
    ///
    /// # Errors
    ///
    /// Archive errors are returned before anything is written. Read, write
    /// and directory errors abort at the failing entry.
    pub fn stage(
        &mut self,
        archive_path: &Path,
        staging: &Path,
        locale: Locale,
        progress: &mut dyn ProgressCallback,
    ) -> Result<StagedArchive> {
        let file = File::open(archive_path).map_err(|source| InstallError::ArchiveOpen {
            path: archive_path.to_path_buf(),
            source,
        })?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(|source| {
            InstallError::InvalidArchive {
                path: archive_path.to_path_buf(),
                source,
            }
        })?;

        fs::create_dir_all(staging).map_err(InstallError::create_dir(staging))?;

        let total = archive.len();
        let mut staged = StagedArchive {
            locale,
            entries: total,
            ..StagedArchive::default()
        };

        for index in 0..total {
            progress.on_progress(index as f64 / total as f64);

            let mut entry = archive
                .by_index(index)
                .map_err(|source| InstallError::EntryRead { index, source })?;
            let name = entry.name().to_owned();

            if staged.locale.is_root() {
                trace!(entry = %name, "trying to detect locale");
                if let Some(found) = detect_locale(&name) {
                    debug!(locale = %found, entry = %name, "locale detected");
                    staged.locale = found;
                    staged.locale_detected = true;
                }
            }

            let target = staging.join(enclosed_path(&entry, &name)?);
            if entry.is_dir() {
                trace!(dir = %target.display(), "creating directory");
                fs::create_dir_all(&target).map_err(InstallError::create_dir(&target))?;
                staged.directories_created += 1;
            } else {
                trace!(file = %target.display(), "extracting");
                let written = write_entry(&mut entry, &target, &mut self.buffer)?;
                staged.files_extracted += 1;
                staged.bytes_written += written;
                progress.on_bytes_written(written);
            }
        }

        Ok(staged)
    }
}

fn enclosed_path<R: Read + Seek>(entry: &zip::read::ZipFile<'_, R>, name: &str) -> Result<PathBuf> {
    entry
        .enclosed_name()
        .map(|path| path.to_path_buf())
        .ok_or_else(|| InstallError::UnsafeEntryName {
            name: name.to_owned(),
        })
}

fn write_entry<R: Read>(reader: &mut R, target: &Path, buffer: &mut CopyBuffer) -> Result<u64> {
    if let Some(parent) = target.parent() {
        if !parent.is_dir() {
            fs::create_dir_all(parent).map_err(InstallError::create_dir(parent))?;
        }
    }

    let file = File::create(target).map_err(InstallError::io(target))?;
    let mut writer = BufWriter::new(file);
    let written = copy_with_buffer(reader, &mut writer, buffer).map_err(InstallError::io(target))?;
    writer.flush().map_err(InstallError::io(target))?;
    Ok(written)
}
