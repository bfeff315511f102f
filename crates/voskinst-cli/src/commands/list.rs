//! List command implementation

use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::path::Path;
use voskinst_core::StorageLayout;
use voskinst_core::catalog::installed_models;

pub fn execute(data_dir: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let models_dir = StorageLayout::new(data_dir).models_dir();

    let models = installed_models(&models_dir)
        .with_context(|| format!("failed to list models in '{}'", models_dir.display()))?;

    formatter.format_models(&models)
}
