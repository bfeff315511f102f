//! Filesystem helpers.

use std::fs;
use std::io;
use std::path::Path;

/// Removes a file, symlink, or directory tree.
///
/// Symlinks are removed, never followed. Returns `Ok(false)` if nothing
/// existed at `path`.
///
/// # Errors
///
/// Returns the first error hit while removing.
pub fn delete_recursive(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Returns `true` if `dir` has no entries.
pub(crate) fn is_empty_dir(dir: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}
