//! Range checks
//!
//! Two checks run over a loaded [`RangeTable`]: every record must satisfy
//! `start <= end`, and no two records may share a point. Both scan in input
//! order so the reported violation is stable across runs.
//!
//! The overlap scan is pairwise. Tables are tens to low hundreds of rows;
//! sorting by start and tracking the running maximum end would bring this
//! near linear if that ever stops being true.

use crate::error::RangeViolation;
use crate::table::{RangeRecord, RangeTable};

/// Runs the well-formedness check, then the overlap check.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate(table: &RangeTable) -> Result<(), RangeViolation> {
    tracing::debug!(ranges = table.len(), "checking range bounds");
    check_well_formed(table)?;

    tracing::debug!(ranges = table.len(), "checking range overlaps");
    check_overlaps(table)?;

    tracing::info!(ranges = table.len(), "all ranges valid");
    Ok(())
}

/// Fails on the first record, in input order, whose start exceeds its end.
///
/// # Errors
///
/// Returns [`RangeViolation::InvalidRange`] for that record.
pub fn check_well_formed(table: &RangeTable) -> Result<(), RangeViolation> {
    match table.records().iter().find(|r| !r.is_well_formed()) {
        Some(record) => Err(invalid_range(record)),
        None => Ok(()),
    }
}

/// Fails on the first pair of intersecting records.
///
/// Each record is compared against every earlier record, both loops in
/// input order. Assumes the table already passed [`check_well_formed`].
///
/// # Errors
///
/// Returns [`RangeViolation::Overlap`] naming the later record first.
pub fn check_overlaps(table: &RangeTable) -> Result<(), RangeViolation> {
    match overlapping_pairs(table.records()).next() {
        Some((later, earlier)) => Err(overlap(later, earlier)),
        None => Ok(()),
    }
}

/// Collects every violation instead of stopping at the first.
///
/// Inverted records come first in input order, followed by every
/// intersecting pair of well-formed records in scan order.
#[must_use]
pub fn collect_violations(table: &RangeTable) -> Vec<RangeViolation> {
    let (valid, inverted): (Vec<&RangeRecord>, Vec<&RangeRecord>) =
        table.records().iter().partition(|r| r.is_well_formed());

    let mut violations: Vec<RangeViolation> = inverted.into_iter().map(invalid_range).collect();

    for (idx, later) in valid.iter().enumerate() {
        for earlier in &valid[..idx] {
            if later.intersects(earlier) {
                violations.push(overlap(later, earlier));
            }
        }
    }

    tracing::debug!(count = violations.len(), "collected range violations");
    violations
}

/// Yields `(later, earlier)` for each intersecting pair in scan order.
fn overlapping_pairs(
    records: &[RangeRecord],
) -> impl Iterator<Item = (&RangeRecord, &RangeRecord)> {
    records.iter().enumerate().flat_map(move |(idx, later)| {
        records[..idx]
            .iter()
            .filter(move |earlier| later.intersects(earlier))
            .map(move |earlier| (later, earlier))
    })
}

fn invalid_range(record: &RangeRecord) -> RangeViolation {
    RangeViolation::InvalidRange {
        name: record.name.clone(),
        row: record.row,
    }
}

fn overlap(later: &RangeRecord, earlier: &RangeRecord) -> RangeViolation {
    RangeViolation::Overlap {
        name: later.name.clone(),
        row: later.row,
        other: earlier.name.clone(),
        other_row: earlier.row,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, u64, u64)]) -> RangeTable {
        rows.iter()
            .enumerate()
            .map(|(idx, (name, start, end))| RangeRecord {
                name: (*name).to_string(),
                start: *start,
                end: *end,
                row: idx + 1,
            })
            .collect()
    }

    #[test]
    fn disjoint_ranges_pass() {
        assert_eq!(validate(&table(&[("A", 1, 2), ("B", 3, 4)])), Ok(()));
    }

    #[test]
    fn empty_table_passes() {
        assert_eq!(validate(&RangeTable::default()), Ok(()));
    }

    #[test]
    fn inverted_range_fails() {
        let err = validate(&table(&[("A", 5, 2)])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid range: \"A\" has start greater than end"
        );
    }

    #[test]
    fn first_inverted_range_in_input_order_wins() {
        let err = check_well_formed(&table(&[("ok", 0, 1), ("B", 9, 8), ("C", 7, 6)]))
            .unwrap_err();
        assert_eq!(
            err,
            RangeViolation::InvalidRange {
                name: "B".to_string(),
                row: 2
            }
        );
    }

    #[test]
    fn inverted_range_reported_before_overlap() {
        // A and B overlap, but C is inverted and bounds run first.
        let err = validate(&table(&[("A", 1, 5), ("B", 4, 8), ("C", 0x20, 0x10)])).unwrap_err();
        assert!(matches!(err, RangeViolation::InvalidRange { ref name, .. } if name == "C"));
    }

    #[test]
    fn overlap_names_later_then_earlier() {
        let err = validate(&table(&[("A", 1, 5), ("B", 4, 8)])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "overlapping ranges: \"B\" intersects with \"A\""
        );
    }

    #[test]
    fn touching_endpoint_overlaps() {
        let err = validate(&table(&[("A", 1, 5), ("B", 5, 8)])).unwrap_err();
        assert!(matches!(err, RangeViolation::Overlap { .. }));
    }

    #[test]
    fn adjacent_ranges_pass() {
        assert_eq!(
            validate(&table(&[("A", 0x10, 0x1F), ("B", 0x20, 0x30)])),
            Ok(())
        );
    }

    #[test]
    fn first_pair_in_scan_order_wins() {
        // C collides with both A and B; B collides with nothing earlier.
        // Scan reaches C last, and compares it with A before B.
        let err = check_overlaps(&table(&[("A", 0, 10), ("B", 20, 30), ("C", 5, 25)]))
            .unwrap_err();
        assert_eq!(
            err,
            RangeViolation::Overlap {
                name: "C".to_string(),
                row: 3,
                other: "A".to_string(),
                other_row: 1,
            }
        );
    }

    #[test]
    fn earlier_outer_index_wins_over_earlier_inner_index() {
        // (C, B) is found at outer index 2; (D, A) only at outer index 3.
        let err = check_overlaps(&table(&[
            ("A", 0, 9),
            ("B", 20, 29),
            ("C", 25, 35),
            ("D", 5, 6),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            RangeViolation::Overlap { ref name, ref other, .. } if name == "C" && other == "B"
        ));
    }

    #[test]
    fn duplicate_ranges_overlap() {
        let err = check_overlaps(&table(&[("A", 3, 3), ("A2", 3, 3)])).unwrap_err();
        assert!(matches!(err, RangeViolation::Overlap { .. }));
    }

    #[test]
    fn validate_is_idempotent() {
        let t = table(&[("A", 1, 5), ("B", 4, 8), ("C", 2, 3)]);
        assert_eq!(validate(&t), validate(&t));
    }

    #[test]
    fn collect_reports_everything() {
        let violations = collect_violations(&table(&[
            ("A", 0, 10),
            ("Bad", 9, 1),
            ("B", 5, 15),
            ("C", 10, 20),
        ]));
        let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "invalid range: \"Bad\" has start greater than end",
                "overlapping ranges: \"B\" intersects with \"A\"",
                "overlapping ranges: \"C\" intersects with \"A\"",
                "overlapping ranges: \"C\" intersects with \"B\"",
            ]
        );
    }

    #[test]
    fn collect_is_empty_for_valid_table() {
        assert!(collect_violations(&table(&[("A", 1, 2), ("B", 3, 4)])).is_empty());
    }

    #[test]
    fn collect_agrees_with_validate_on_first_violation() {
        let t = table(&[("A", 1, 5), ("B", 6, 9), ("C", 9, 12)]);
        let first = validate(&t).unwrap_err();
        assert_eq!(collect_violations(&t).first(), Some(&first));
    }
}
