//! Moving a staged tree into its destination.
//!
//! A fresh destination receives the staging directory through a single
//! rename. An existing destination keeps its content: each top-level staged
//! item is renamed into it, then the emptied staging directory is removed.
//! Name collisions are not resolved. On Unix a staged file silently replaces
//! an existing file, while a staged directory cannot replace a non-empty one
//! and the move stops there.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::InstallError;
use crate::Result;
use crate::report::Relocation;

/// Moves the content of `staging` to `destination`.
///
/// Nothing is rolled back on failure; whatever is left in `staging` is
/// removed by the next install.
///
/// # Errors
///
/// Returns [`InstallError::Relocate`] for the first rename or removal that
/// fails.
pub fn relocate(staging: &Path, destination: &Path) -> Result<Relocation> {
    if destination.exists() {
        let moved = merge_into(staging, destination)?;
        Ok(Relocation::Merged { moved })
    } else {
        rename_onto(staging, destination)?;
        Ok(Relocation::Renamed)
    }
}

fn merge_into(staging: &Path, destination: &Path) -> Result<usize> {
    let relocate_err = |source: std::io::Error| InstallError::Relocate {
        from: staging.to_path_buf(),
        to: destination.to_path_buf(),
        source,
    };

    let mut moved = 0;
    for entry in fs::read_dir(staging).map_err(relocate_err)? {
        let entry = entry.map_err(relocate_err)?;
        let from = entry.path();
        let to = destination.join(entry.file_name());
        fs::rename(&from, &to).map_err(|source| InstallError::Relocate {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        debug!(from = %from.display(), to = %to.display(), "moved staged item");
        moved += 1;
    }

    fs::remove_dir(staging).map_err(relocate_err)?;
    Ok(moved)
}

fn rename_onto(staging: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|source| InstallError::Relocate {
            from: staging.to_path_buf(),
            to: parent.to_path_buf(),
            source,
        })?;
    }

    fs::rename(staging, destination).map_err(|source| InstallError::Relocate {
        from: staging.to_path_buf(),
        to: destination.to_path_buf(),
        source,
    })?;
    debug!(to = %destination.display(), "renamed staging directory");
    Ok(())
}
