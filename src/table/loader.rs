//! Range table loader
//!
//! Reads a CSV table with a header row naming `start_range`, `end_range` and
//! `name` (any order, extra columns ignored). Numeric fields are base-16 with
//! an optional `0x` prefix and `_` digit separators. The first bad field
//! aborts the load.

use std::io::Read;
use std::path::Path;

use crate::error::LoadError;
use crate::table::{RangeRecord, RangeTable};

/// Columns every table must declare.
pub const REQUIRED_COLUMNS: [&str; 3] = ["start_range", "end_range", "name"];

/// Loads a range table from `path`.
///
/// The file is read in full and closed before parsing starts.
///
/// # Errors
///
/// Returns [`LoadError::MissingFile`] if `path` does not exist,
/// [`LoadError::Io`] if it cannot be read, and any error from [`read_table`].
pub fn load_table(path: &Path) -> Result<RangeTable, LoadError> {
    tracing::info!(file = %path.display(), "loading range table");

    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let table = read_table(bytes.as_slice())?;
    tracing::info!(file = %path.display(), ranges = table.len(), "range table loaded");
    Ok(table)
}

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    start_range: usize,
    end_range: usize,
    name: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn { column })
        };
        Ok(Self {
            start_range: find(REQUIRED_COLUMNS[0])?,
            end_range: find(REQUIRED_COLUMNS[1])?,
            name: find(REQUIRED_COLUMNS[2])?,
        })
    }
}

/// Parses a range table from any reader, preserving row order.
///
/// Rows may be shorter or longer than the header as long as every required
/// column is present; cells past the header and trailing optional columns
/// are ignored.
///
/// # Errors
///
/// Returns [`LoadError::MissingColumn`] if the header lacks a required
/// column, [`LoadError::MissingField`] if a row stops before a required
/// column, [`LoadError::InvalidHex`] for a non-hexadecimal numeric field,
/// [`LoadError::EmptyName`] for a blank name, and [`LoadError::Malformed`]
/// for CSV framing errors.
pub fn read_table<R: Read>(reader: R) -> Result<RangeTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(csv_reader.headers().map_err(malformed)?)?;

    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row_number = idx + 1;
        let raw = row.map_err(malformed)?;
        let record = decode_row(&raw, columns, row_number)?;
        tracing::trace!(
            row = row_number,
            name = %record.name,
            start = record.start,
            end = record.end,
            "parsed range"
        );
        records.push(record);
    }

    tracing::debug!(rows = records.len(), "parsed range rows");
    Ok(RangeTable::new(records))
}

fn decode_row(
    raw: &csv::StringRecord,
    columns: ColumnIndex,
    row: usize,
) -> Result<RangeRecord, LoadError> {
    let cell = |index: usize, field: &'static str| {
        raw.get(index)
            .ok_or(LoadError::MissingField { row, field })
    };
    let hex = |index: usize, field: &'static str| {
        let value = cell(index, field)?;
        parse_hex(value).ok_or_else(|| LoadError::InvalidHex {
            row,
            field,
            value: value.to_string(),
        })
    };

    let start = hex(columns.start_range, "start_range")?;
    let end = hex(columns.end_range, "end_range")?;

    let name = cell(columns.name, "name")?.trim();
    if name.is_empty() {
        return Err(LoadError::EmptyName { row });
    }

    Ok(RangeRecord {
        name: name.to_string(),
        start,
        end,
        row,
    })
}

/// Parses a base-16 literal, accepting an optional `0x`/`0X` prefix,
/// surrounding whitespace, and single `_` separators between digit groups
/// (`0x00_10`, `0x_10`).
///
/// Returns `None` for empty input, signs, non-hex digits, misplaced
/// underscores, or values that do not fit in a `u64`.
#[must_use]
pub fn parse_hex(raw: &str) -> Option<u64> {
    let text = raw.trim();
    let digits = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => text,
    };

    let mut compact = String::with_capacity(digits.len());
    for group in digits.split('_') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        compact.push_str(group);
    }
    u64::from_str_radix(&compact, 16).ok()
}

fn malformed(err: csv::Error) -> LoadError {
    let row = err
        .position()
        .and_then(|pos| usize::try_from(pos.record()).ok());
    LoadError::Malformed {
        row,
        message: err.to_string(),
    }
}
