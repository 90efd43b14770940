//! Error types shared by every profiler crate.

use thiserror::Error;

/// Errors produced while loading or profiling a dataset.
///
/// A profiling run either succeeds completely or fails with exactly one of
/// these; nothing is downgraded to a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdaError {
    /// The source location could not be read (I/O, network or HTTP status).
    #[error("source unavailable: {location}: {message}")]
    SourceUnavailable { location: String, message: String },

    /// The CSV content does not form a rectangular, well-typed table.
    #[error("malformed input in {location}{}: {message}", line_suffix(.line))]
    MalformedInput {
        location: String,
        /// 1-based line of the offending record, when known.
        line: Option<u64>,
        message: String,
    },

    /// A requested column is not present in the dataset.
    #[error("column '{column}' not found")]
    UnknownColumn { column: String },

    /// Numeric statistics were requested on a column holding text.
    #[error("column '{column}' is not numeric")]
    NonNumericColumn { column: String },

    /// A column specification assigns a name to more than one role.
    #[error("invalid column spec: {reason}")]
    InvalidColumnSpec { reason: String },
}

impl EdaError {
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    pub fn non_numeric(column: impl Into<String>) -> Self {
        Self::NonNumericColumn {
            column: column.into(),
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" at line {line}"),
        None => String::new(),
    }
}

/// Result type for profiler operations.
pub type Result<T> = std::result::Result<T, EdaError>;
