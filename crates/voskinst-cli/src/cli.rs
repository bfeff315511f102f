//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use voskinst_core::Locale;

#[derive(Parser)]
#[command(name = "voskinst")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Application data directory holding staging and installed models
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install a zipped model archive
    Install(InstallArgs),
    /// List installed models
    List,
    /// Remove an installed model
    Remove(RemoveArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Install(_) => "install",
            Self::List => "list",
            Self::Remove(_) => "remove",
            Self::Completion { .. } => "completion",
        }
    }
}

#[derive(clap::Args)]
pub struct InstallArgs {
    /// Path to the model archive (.zip)
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Install for this locale instead of detecting it from entry names
    #[arg(short, long, value_name = "TAG")]
    pub locale: Option<Locale>,
}

#[derive(clap::Args)]
pub struct RemoveArgs {
    /// Locale the model is installed under, e.g. en-US
    #[arg(value_name = "LOCALE")]
    pub locale: Locale,

    /// Model directory name
    #[arg(value_name = "NAME")]
    pub name: String,
}
