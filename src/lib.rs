//! `rangecheck` - validator for tables of named error-code ranges
//!
//! Loads a CSV table of hexadecimal `[start, end]` ranges and checks that
//! no range is inverted and no two ranges share a code.

pub mod cli;
pub mod error;
pub mod observability;
pub mod report;
pub mod table;
