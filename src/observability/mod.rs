//! Observability
//!
//! Diagnostic logging for `rangecheck`. Logs go to stderr so that stdout
//! carries only the validation result.

pub mod logging;

pub use logging::{LogFormat, init_logging, run_span};
