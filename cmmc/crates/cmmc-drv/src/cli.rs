//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::LayoutSetting;

/// cmmc - tokenizer for the cmm language
///
/// Reads a cmm program from standard input (or INPUT), writes one record
/// per token to standard output, and stops at the first illegal character
/// with `Lexical error: '<char>' in line number <N>`.
///
/// Exit status: 0 on success, 1 on a lexical error, 2 on usage,
/// configuration or I/O failures.
#[derive(Parser, Debug, Default, Clone, PartialEq)]
#[command(name = "cmmc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizer for the cmm language", long_about)]
pub struct Cli {
    /// Source file to lex (default: standard input)
    pub input: Option<PathBuf>,

    /// Record layout (default: lines, or the configuration file's)
    #[arg(long, value_enum)]
    pub layout: Option<LayoutSetting>,

    /// Enable debug logging and print full diagnostics on standard error
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CMMC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}
