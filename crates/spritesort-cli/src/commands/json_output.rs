//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `check`. Codes from the core library
//! (`SORT_xxx`) pass through unchanged; CLI-level failures use `CLI_xxx`.

use serde::Serialize;
use spritesort_core::{OrderReport, SortError};

/// Error codes for CLI operations.
pub mod error_codes {
    /// Configuration could not be resolved (config file or grid)
    pub const CONFIG: &str = "CLI_001";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Records lie beyond `width * height` and are ordered by row only
    pub const GRID_OVERFLOW: &str = "CLI_W001";
    /// Collection length is not a multiple of the grid width
    pub const SHORT_FINAL_WINDOW: &str = "CLI_W002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "SORT_006", "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Index of the offending record (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<usize>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            record: None,
            file: None,
        }
    }

    /// Sets the source file for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&SortError> for JsonError {
    fn from(err: &SortError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            record: err.record_index(),
            file: None,
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// JSON output for the `check` command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// Whether the input is already in grid order
    pub success: bool,
    /// Input file that was checked
    pub input: String,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Order report (absent when the input could not be loaded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<OrderReport>,
}

impl CheckOutput {
    /// Creates output from a completed inspection.
    pub fn from_report(input: impl Into<String>, report: OrderReport) -> Self {
        let warnings = report_warnings(&report);
        Self {
            success: report.is_fixed_point,
            input: input.into(),
            errors: Vec::new(),
            warnings,
            result: Some(report),
        }
    }

    /// Creates a failed output.
    pub fn failure(input: impl Into<String>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            input: input.into(),
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Warnings worth surfacing for a report, shared by human and JSON output.
pub fn report_warnings(report: &OrderReport) -> Vec<JsonWarning> {
    let mut warnings = Vec::new();
    if report.overflow > 0 {
        warnings.push(JsonWarning::new(
            warning_codes::GRID_OVERFLOW,
            format!(
                "{} record(s) lie beyond the {} grid and are ordered by row only",
                report.overflow, report.grid
            ),
        ));
    }
    if report.record_count % report.grid.width() != 0 {
        warnings.push(JsonWarning::new(
            warning_codes::SHORT_FINAL_WINDOW,
            format!(
                "record count {} is not a multiple of width {}; the last row is short",
                report.record_count,
                report.grid.width()
            ),
        ));
    }
    warnings
}
