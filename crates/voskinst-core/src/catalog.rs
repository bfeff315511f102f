//! Installed model discovery and removal.
//!
//! Installed models live two levels below the models directory:
//! `<models>/<language-tag>/<model-name>/`. Anything that is not a directory
//! at either level is ignored.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::InstallError;
use crate::Locale;
use crate::Result;
use crate::fs::delete_recursive;
use crate::fs::is_empty_dir;

/// A model directory found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledModel {
    /// Model directory.
    pub path: PathBuf,
    /// Locale parsed from the parent directory name.
    pub locale: Locale,
    /// Model directory name, e.g. `vosk-model-small-en-us-0.22`.
    pub name: String,
}

/// Lists every installed model under `models_dir`.
///
/// Models are sorted by language tag, then by name. A missing `models_dir` yields
/// an empty list.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn installed_models(models_dir: &Path) -> Result<Vec<InstalledModel>> {
    let mut models: Vec<InstalledModel> = installed_models_by_locale(models_dir)?
        .into_values()
        .flatten()
        .collect();
    models.sort_by_cached_key(|model| (model.locale.to_language_tag(), model.name.clone()));
    Ok(models)
}

/// Lists installed models grouped by locale.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn installed_models_by_locale(models_dir: &Path) -> Result<BTreeMap<Locale, Vec<InstalledModel>>> {
    let mut by_locale: BTreeMap<Locale, Vec<InstalledModel>> = BTreeMap::new();
    if !models_dir.is_dir() {
        return Ok(by_locale);
    }

    for locale_dir in subdirectories(models_dir)? {
        let Some(tag) = file_name(&locale_dir) else {
            continue;
        };
        let locale = Locale::from_language_tag(&tag);
        let models = by_locale.entry(locale.clone()).or_default();

        for model_dir in subdirectories(&locale_dir)? {
            let Some(name) = file_name(&model_dir) else {
                continue;
            };
            models.push(InstalledModel {
                path: model_dir,
                locale: locale.clone(),
                name,
            });
        }
        models.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(by_locale)
}

/// Looks up the model `name` installed for `locale`.
///
/// `name` must be a single path component; `..`, empty names and names with
/// separators never match.
#[must_use]
pub fn find_model(models_dir: &Path, locale: &Locale, name: &str) -> Option<InstalledModel> {
    if !is_model_name(name) {
        return None;
    }
    let path = models_dir.join(locale.to_language_tag()).join(name);
    path.is_dir().then(|| InstalledModel {
        path,
        locale: locale.clone(),
        name: name.to_owned(),
    })
}

/// Deletes an installed model.
///
/// The locale directory is removed as well once it holds nothing else.
///
/// # Errors
///
/// Returns [`InstallError::ModelNotFound`] if the model directory is gone,
/// or an I/O error if deletion fails.
pub fn remove_model(model: &InstalledModel) -> Result<()> {
    if !is_model_name(&model.name) || model.path.file_name() != Some(OsStr::new(&model.name)) {
        return Err(InstallError::ModelNotFound {
            path: model.path.clone(),
        });
    }

    let removed = delete_recursive(&model.path).map_err(InstallError::io(&model.path))?;
    if !removed {
        return Err(InstallError::ModelNotFound {
            path: model.path.clone(),
        });
    }
    debug!(model = %model.name, locale = %model.locale, "removed model");

    if let Some(locale_dir) = model.path.parent() {
        if is_empty_dir(locale_dir).map_err(InstallError::io(locale_dir))? {
            fs::remove_dir(locale_dir).map_err(InstallError::io(locale_dir))?;
        }
    }
    Ok(())
}

fn is_model_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(component)), None) if component == OsStr::new(name)
    )
}

fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(InstallError::io(dir))? {
        let entry = entry.map_err(InstallError::io(dir))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
}
