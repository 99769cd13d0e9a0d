//! Error types for tsvreportlib

use thiserror::Error;

/// Errors that can occur while loading, sorting, or reporting a table
#[derive(Error, Debug)]
pub enum TsvReportError {
    /// Reading the input stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no header line
    #[error("input is empty: expected a header line")]
    EmptyInput,

    /// More data rows than the configured limit
    #[error("input has more than {limit} data rows")]
    TooManyRows { limit: usize },

    /// A line with more fields than the configured limit
    #[error("line {line} has more than {limit} columns")]
    TooManyColumns { line: usize, limit: usize },

    /// A line whose field count differs from the header (strict mode only)
    #[error("line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// A sort key argument that is not a positive integer
    #[error("invalid sort key '{arg}': {reason}")]
    InvalidSortKey { arg: String, reason: String },

    /// A sort key naming a column the table does not have
    #[error("sort key {key} is out of range: table has {columns} columns")]
    SortKeyOutOfRange { key: usize, columns: usize },

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
