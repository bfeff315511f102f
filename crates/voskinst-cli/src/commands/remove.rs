//! Remove command implementation

use crate::cli::RemoveArgs;
use crate::error::convert_remove_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use voskinst_core::InstallError;
use voskinst_core::StorageLayout;
use voskinst_core::catalog::find_model;
use voskinst_core::catalog::remove_model;

pub fn execute(args: &RemoveArgs, data_dir: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let models_dir = StorageLayout::new(data_dir).models_dir();

    let Some(model) = find_model(&models_dir, &args.locale, &args.name) else {
        let path = models_dir
            .join(args.locale.to_language_tag())
            .join(&args.name);
        return Err(convert_remove_error(
            InstallError::ModelNotFound { path: path.clone() },
            &path,
        ));
    };

    remove_model(&model).map_err(|err| convert_remove_error(err, &model.path))?;

    formatter.format_removed(&model)
}
