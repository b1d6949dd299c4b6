//! Test harness utilities for running CLI commands and reading their outputs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::TempDir;

use spritesort_cli::commands;
use spritesort_cli::config::SortSettings;

/// A temporary working directory for sheet files.
pub struct TestHarness {
    /// Working directory for test inputs and outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Read a file from the work directory as JSON.
    pub fn read_json(&self, name: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.path().join(name)).expect("Failed to read output");
        serde_json::from_str(&content).expect("Output is not valid JSON")
    }

    /// Run `sort` from `input` to `output` (both relative to the work dir).
    pub fn sort(
        &self,
        input: &str,
        output: &str,
        width: usize,
        height: usize,
    ) -> anyhow::Result<ExitCode> {
        commands::sort::run(
            None,
            SortSettings {
                input_path: Some(self.path().join(input)),
                output_path: Some(self.path().join(output)),
                width: Some(width),
                height: Some(height),
            },
            false,
            true,
        )
    }

    /// Run `check --json` on `input` (relative to the work dir).
    pub fn check(&self, input: &str, width: usize, height: usize) -> anyhow::Result<ExitCode> {
        commands::check::run(
            None,
            SortSettings {
                input_path: Some(self.path().join(input)),
                width: Some(width),
                height: Some(height),
                ..Default::default()
            },
            true,
        )
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
