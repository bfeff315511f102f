//! voskinst CLI - installs zipped Vosk speech models into per-locale
//! directories.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(&cli);

    match run(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(cli.command.name(), &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    match &cli.command {
        Commands::Install(args) => {
            let show_progress = !cli.quiet && !cli.json;
            commands::install::execute(args, &cli.data_dir, formatter, show_progress)
        }
        Commands::List => commands::list::execute(&cli.data_dir, formatter),
        Commands::Remove(args) => commands::remove::execute(args, &cli.data_dir, formatter),
        Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays clean for results and JSON.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
