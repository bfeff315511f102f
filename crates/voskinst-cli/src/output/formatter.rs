//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use voskinst_core::InstallReport;
use voskinst_core::InstalledModel;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format install result
    fn format_install_result(&self, archive: &Path, report: &InstallReport) -> Result<()>;

    /// Format the list of installed models
    fn format_models(&self, models: &[InstalledModel]) -> Result<()>;

    /// Format a removed model
    fn format_removed(&self, model: &InstalledModel) -> Result<()>;

    /// Format error message for the failed `operation`
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Serializable view of an installed model
#[derive(Debug, Serialize)]
pub struct ModelOutput {
    pub locale: String,
    pub name: String,
    pub path: String,
}

impl From<&InstalledModel> for ModelOutput {
    fn from(model: &InstalledModel) -> Self {
        Self {
            locale: model.locale.to_string(),
            name: model.name.clone(),
            path: model.path.display().to_string(),
        }
    }
}
