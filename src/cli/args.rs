//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use clap_complete::Shell;

use crate::domain::BlankLines;

/// Create a directory structure given a simple input format
///
/// Each line of INPUT names one directory; leading spaces nest it under the
/// closest less-indented line above. OUTPUT must exist and becomes the root.
#[derive(Parser, Debug)]
#[command(name = "arbori")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Outline file, or `-` for stdin
    #[arg(
        value_hint = ValueHint::FilePath,
        required_unless_present_any = ["generator", "show_config"]
    )]
    pub input: Option<PathBuf>,

    /// Existing directory that becomes the root of the created tree
    #[arg(
        value_hint = ValueHint::DirPath,
        required_unless_present_any = ["generator", "show_config"]
    )]
    pub output: Option<PathBuf>,

    /// Print the tree instead of creating directories
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// How to treat blank lines (overrides config)
    #[arg(long, value_enum)]
    pub blank_lines: Option<BlankLinesArg>,

    /// Do not print the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completion script and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Blank-line policy as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankLinesArg {
    /// Ignore blank lines
    Skip,
    /// Fail on blank lines
    Reject,
}

impl From<BlankLinesArg> for BlankLines {
    fn from(arg: BlankLinesArg) -> Self {
        match arg {
            BlankLinesArg::Skip => BlankLines::Skip,
            BlankLinesArg::Reject => BlankLines::Reject,
        }
    }
}
