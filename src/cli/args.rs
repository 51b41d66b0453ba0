//! CLI argument definitions
//!
//! Clap derive structs for `rangecheck` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::observability::LogFormat;

/// Default input table, resolved against the working directory.
pub const DEFAULT_TABLE: &str = "error-codes.csv";

/// Validate a table of named hexadecimal error-code ranges.
///
/// Checks that no range has its start past its end and that no two ranges
/// share a code.
#[derive(Parser, Debug)]
#[command(name = "rangecheck", author, version, about)]
pub struct Cli {
    /// CSV table with `start_range`, `end_range` and `name` columns.
    #[arg(value_name = "FILE", default_value = DEFAULT_TABLE, env = "RANGECHECK_FILE")]
    pub file: PathBuf,

    /// Result output format.
    #[arg(short, long, default_value = "human", env = "RANGECHECK_FORMAT")]
    pub format: OutputFormat,

    /// Report every violation instead of stopping at the first.
    #[arg(long)]
    pub all: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "RANGECHECK_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One diagnostic line, as plain text.
    #[default]
    Human,
    /// A single JSON object.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
