//! CLI command handlers

pub mod check;

use crate::cli::args::Cli;
use crate::error::RangeCheckError;
use crate::observability::run_span;

/// Runs the command described by the parsed arguments.
///
/// # Errors
///
/// Returns an error if the command fails; see [`check::run`].
pub fn dispatch(cli: &Cli) -> Result<(), RangeCheckError> {
    let _span = run_span(&cli.file).entered();
    tracing::debug!(all = cli.all, format = ?cli.format, "running range check");
    check::run(cli)
}
