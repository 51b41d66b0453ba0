//! Range table check
//!
//! Loads the table, runs the checks and writes the verdict to stdout.

use std::io::Write;

use crate::cli::args::Cli;
use crate::error::{RangeCheckError, RangeViolation};
use crate::report::write_report;
use crate::table::{collect_violations, load_table, validate};

/// Validates the table named on the command line, reporting to stdout.
///
/// # Errors
///
/// See [`run_with_output`].
pub fn run(args: &Cli) -> Result<(), RangeCheckError> {
    let stdout = std::io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Validates the table named on the command line, reporting to `out`.
///
/// The verdict is written before a violation is returned, so callers only
/// need to print load and I/O errors.
///
/// # Errors
///
/// Returns a load error if the table cannot be read, an I/O error if the
/// report cannot be written, and a violation error if a check fails.
pub fn run_with_output<W: Write>(args: &Cli, out: &mut W) -> Result<(), RangeCheckError> {
    let table = load_table(&args.file)?;

    let mut violations: Vec<RangeViolation> = if args.all {
        collect_violations(&table)
    } else {
        validate(&table).err().into_iter().collect()
    };

    write_report(out, args.format, table.len(), &violations)?;

    match violations.len() {
        0 => Ok(()),
        1 => Err(violations.swap_remove(0).into()),
        _ => Err(RangeCheckError::Violations(violations)),
    }
}
