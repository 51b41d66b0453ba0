//! Error types for `rangecheck`
//!
//! Load failures and range violations are kept apart: the former abort the
//! run before any check happens, the latter are the validator's verdict.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `rangecheck` runs.
pub struct ExitCode;

impl ExitCode {
    /// All ranges are well-formed and disjoint
    pub const SUCCESS: i32 = 0;

    /// A range is inverted or two ranges overlap
    pub const VIOLATION: i32 = 1;

    /// The table could not be parsed (bad hex, missing column, bad CSV)
    pub const LOAD_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `rangecheck` operations.
#[derive(Debug, Error)]
pub enum RangeCheckError {
    /// The range table could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The table loaded but failed a check
    #[error(transparent)]
    Violation(#[from] RangeViolation),

    /// Several violations, reported together
    #[error("{} range violations found", .0.len())]
    Violations(Vec<RangeViolation>),

    /// I/O error while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RangeCheckError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Violation(_) | Self::Violations(_) => ExitCode::VIOLATION,
            Self::Load(LoadError::MissingFile { .. } | LoadError::Io { .. })
            | Self::Io(_)
            | Self::Json(_) => ExitCode::IO_ERROR,
            Self::Load(_) => ExitCode::LOAD_ERROR,
        }
    }

    /// Returns `true` for check failures, which are already part of the
    /// printed report.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_) | Self::Violations(_))
    }
}

// ============================================================================
// Load Errors
// ============================================================================

/// Failures while reading the range table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("file not found: {path}")]
    MissingFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Input file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Header row lacks a required column
    #[error("missing required column '{column}'")]
    MissingColumn {
        /// Name of the absent column
        column: &'static str,
    },

    /// A numeric field is not a hexadecimal literal
    #[error("row {row}: field '{field}' is not valid hexadecimal: {value:?}")]
    InvalidHex {
        /// 1-based data row
        row: usize,
        /// Column name
        field: &'static str,
        /// Raw text as found in the input
        value: String,
    },

    /// The `name` field is blank
    #[error("row {row}: field 'name' is empty")]
    EmptyName {
        /// 1-based data row
        row: usize,
    },

    /// A row ends before a required column
    #[error("row {row}: missing field '{field}'")]
    MissingField {
        /// 1-based data row
        row: usize,
        /// Column name
        field: &'static str,
    },

    /// CSV framing error (bad UTF-8, unreadable input)
    #[error(
        "malformed table{}: {message}",
        .row.map(|r| format!(" at row {r}")).unwrap_or_default()
    )]
    Malformed {
        /// 1-based data row, when known
        row: Option<usize>,
        /// Reader's description of the problem
        message: String,
    },
}

// ============================================================================
// Range Violations
// ============================================================================

/// A failed range check.
///
/// `Display` renders the exact diagnostic line printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeViolation {
    /// A record whose start lies past its end
    #[error("invalid range: \"{name}\" has start greater than end")]
    InvalidRange {
        /// Offending record's name
        name: String,
        /// 1-based data row of the record
        row: usize,
    },

    /// Two records whose closed intervals intersect
    #[error("overlapping ranges: \"{name}\" intersects with \"{other}\"")]
    Overlap {
        /// The later record in input order
        name: String,
        /// 1-based data row of the later record
        row: usize,
        /// The earlier record it collides with
        other: String,
        /// 1-based data row of the earlier record
        other_row: usize,
    },
}

/// Result type alias for `rangecheck` operations.
pub type Result<T> = std::result::Result<T, RangeCheckError>;

// ============================================================================
// Tests
// ============================================================================
