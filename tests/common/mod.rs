//! Shared integration-test harness for running the `rangecheck` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for invoking the built binary.
pub struct RangeCheckProcess;

impl RangeCheckProcess {
    /// Runs the binary with `args` in `cwd`, with env overrides cleared.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_rangecheck"))
            .args(args)
            .current_dir(cwd)
            .env_remove("RANGECHECK_FILE")
            .env_remove("RANGECHECK_FORMAT")
            .env_remove("RANGECHECK_LOG_LEVEL")
            .output()
            .expect("failed to run rangecheck")
    }

    /// Runs the binary with `args` from the crate root.
    pub fn run(args: &[&str]) -> Output {
        Self::run_in(Path::new(env!("CARGO_MANIFEST_DIR")), args)
    }

    /// Runs the binary against a fixture table.
    #[allow(clippy::missing_panics_doc)]
    pub fn check_fixture(name: &str, extra: &[&str]) -> Output {
        let path = Self::fixture_path(name);
        let mut args = vec![path.to_str().expect("non-UTF-8 fixture path")];
        args.extend_from_slice(extra);
        Self::run(&args)
    }

    /// Returns the absolute path to a test fixture.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Captured stdout as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captured stderr as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
