//! Command-line interface
//!
//! Argument parsing and the top-level `check` command.

pub mod args;
pub mod commands;
