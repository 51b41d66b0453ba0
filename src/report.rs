//! Result rendering
//!
//! Turns the outcome of a run into the text written on stdout: either the
//! plain diagnostic lines or one JSON object.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::RangeViolation;

/// Line printed when every check passes.
pub const SUCCESS_MESSAGE: &str = "no errors found";

/// JSON shape of a run's outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report<'a> {
    /// Every range is well-formed and disjoint.
    Ok {
        /// Number of ranges checked.
        ranges: usize,
    },
    /// At least one check failed.
    Error {
        /// Violations in reporting order.
        violations: Vec<ViolationReport<'a>>,
    },
}

/// JSON shape of a single violation.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationReport<'a> {
    /// See [`RangeViolation::InvalidRange`].
    InvalidRange {
        name: &'a str,
        row: usize,
        message: String,
    },
    /// See [`RangeViolation::Overlap`].
    Overlap {
        name: &'a str,
        row: usize,
        other: &'a str,
        other_row: usize,
        message: String,
    },
}

impl<'a> From<&'a RangeViolation> for ViolationReport<'a> {
    fn from(violation: &'a RangeViolation) -> Self {
        let message = violation.to_string();
        match violation {
            RangeViolation::InvalidRange { name, row } => Self::InvalidRange {
                name,
                row: *row,
                message,
            },
            RangeViolation::Overlap {
                name,
                row,
                other,
                other_row,
            } => Self::Overlap {
                name,
                row: *row,
                other,
                other_row: *other_row,
                message,
            },
        }
    }
}

impl<'a> Report<'a> {
    /// Builds a report from the violations found over `ranges` records.
    #[must_use]
    pub fn new(ranges: usize, violations: &'a [RangeViolation]) -> Self {
        if violations.is_empty() {
            Self::Ok { ranges }
        } else {
            Self::Error {
                violations: violations.iter().map(ViolationReport::from).collect(),
            }
        }
    }
}

/// Writes the outcome in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `out` or JSON serialization fails.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    ranges: usize,
    violations: &[RangeViolation],
) -> crate::error::Result<()> {
    match format {
        OutputFormat::Human => {
            if violations.is_empty() {
                writeln!(out, "{SUCCESS_MESSAGE}")?;
            }
            for violation in violations {
                writeln!(out, "{violation}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Report::new(ranges, violations))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
