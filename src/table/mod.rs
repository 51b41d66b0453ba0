//! Range table model
//!
//! A [`RangeTable`] is the ordered, immutable set of records produced by the
//! loader and handed to the checks in [`validation`].

pub mod loader;
pub mod validation;

pub use loader::{load_table, read_table};
pub use validation::{check_overlaps, check_well_formed, collect_violations, validate};

/// A named closed interval `[start, end]` read from one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    /// Label, trimmed of surrounding whitespace.
    pub name: String,
    /// Inclusive lower bound.
    pub start: u64,
    /// Inclusive upper bound.
    pub end: u64,
    /// 1-based data row the record came from.
    pub row: usize,
}

impl RangeRecord {
    /// Returns `true` if `start <= end`.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Closed-interval intersection test; touching endpoints intersect.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Range records in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable {
    records: Vec<RangeRecord>,
}

impl RangeTable {
    /// Wraps records that are already in input order.
    #[must_use]
    pub const fn new(records: Vec<RangeRecord>) -> Self {
        Self { records }
    }

    /// Records in input order.
    #[must_use]
    pub fn records(&self) -> &[RangeRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RangeRecord> for RangeTable {
    fn from_iter<I: IntoIterator<Item = RangeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
