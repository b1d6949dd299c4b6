//! Error types for loading, sorting, and writing sprite collections.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for sprite collection operations.
#[derive(Debug, Error)]
pub enum SortError {
    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The input file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("expected a JSON array of sprite records, found {found}")]
    NotAnArray { found: &'static str },

    /// An element of the record array is not a JSON object.
    #[error("record {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    /// A record lacks one of the required coordinate fields.
    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A coordinate field holds a value that cannot be ordered as an integer.
    #[error("record {index} field `{field}` is not an integer: {value}")]
    IncomparableValue {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// Grid dimensions must both be positive.
    #[error("invalid grid {width}x{height}: width and height must be positive")]
    InvalidGrid { width: usize, height: usize },

    /// The output destination could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the collection failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl SortError {
    /// Returns the stable error code (e.g., "SORT_001").
    pub fn code(&self) -> &'static str {
        match self {
            SortError::InputNotFound { .. } => "SORT_001",
            SortError::Read { .. } => "SORT_002",
            SortError::InvalidJson(_) => "SORT_003",
            SortError::NotAnArray { .. } => "SORT_004",
            SortError::NotAnObject { .. } => "SORT_005",
            SortError::MissingField { .. } => "SORT_006",
            SortError::IncomparableValue { .. } => "SORT_007",
            SortError::InvalidGrid { .. } => "SORT_008",
            SortError::Write { .. } => "SORT_009",
            SortError::Serialize(_) => "SORT_010",
        }
    }

    /// Returns the index of the offending record, if the error concerns one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            SortError::NotAnObject { index, .. }
            | SortError::MissingField { index, .. }
            | SortError::IncomparableValue { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Short name of a JSON value's kind, used in diagnostics.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
