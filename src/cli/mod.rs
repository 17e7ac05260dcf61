//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{BlankLinesArg, Cli};
pub use commands::{apply_cli_overrides, execute_command, execute_with, summary_line};
pub use error::{CliError, CliResult};
