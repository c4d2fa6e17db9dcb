//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the process environment
//! - Sample input files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every test command.
const ENHANCE_VARS: &[&str] = &[
    "ENHANCE_CONFIG",
    "ENHANCE_DIRECTIVE_KEY",
    "ENHANCE_SIMPLE_DIRECTIVE_KEY",
    "ENHANCE_STRICT",
    "ENHANCE_STRIP_UNRESOLVED",
    "ENHANCE_LOG_MODE",
];

/// A file exercising every operator, with no problems.
#[allow(dead_code)]
pub const REALISTIC: &str = "\
[common]
alpha = 1.0
beta = 2.0

[tes_100]
<<= <common
beta = 5.0
gamma = 6.0

[dev_tes_common]
gamma = 6.0d

[dev_unpin]
alpha = unpin

[dev_tes_100]
<<= <tes_100
    +dev_tes_common
    -dev_unpin
";

/// A file with one missing reference and one healthy section.
#[allow(dead_code)]
pub const BROKEN: &str = "\
[base]
alpha = 1.0

[orphan]
<<= <does_not_exist
kept = yes

[healthy]
<= base
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the enhance binary with a clean
    /// `ENHANCE_*` environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("enhance").expect("Failed to find enhance binary");
        for var in ENHANCE_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Read a file under the temporary directory.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }

    /// Run a command and parse its stdout as JSON.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.command().args(args).output().expect("Failed to run enhance");
        assert!(
            output.status.success(),
            "enhance {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
    }
}
