//! Subcommand implementations.

pub mod completion;
pub mod install;
pub mod list;
pub mod remove;
