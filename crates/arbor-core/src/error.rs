//! Error types and exit codes for arbor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/parameters)
//! - 3: Data error (unreadable graph file, no spanning tree, etc.)

use thiserror::Error;

/// Exit codes for the arbor CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph file, impossible request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arbor operations
#[derive(Error, Debug)]
pub enum ArborError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("graph is not connected: no spanning tree exists")]
    NoSpanningTree,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ArborError {
    /// Create an error for an invalid value or parameter
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ArborError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ArborError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArborError::UnknownFormat(_)
            | ArborError::DuplicateFormat
            | ArborError::UsageError(_)
            | ArborError::InvalidValue { .. } => ExitCode::Usage,

            ArborError::InvalidMatrix { .. } | ArborError::NoSpanningTree => ExitCode::Data,

            ArborError::Io(_)
            | ArborError::Json(_)
            | ArborError::FailedOperationWithTarget { .. }
            | ArborError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ArborError::UnknownFormat(_) => "unknown_format",
            ArborError::DuplicateFormat => "duplicate_format",
            ArborError::UsageError(_) => "usage_error",
            ArborError::InvalidValue { .. } => "invalid_value",
            ArborError::InvalidMatrix { .. } => "invalid_matrix",
            ArborError::NoSpanningTree => "no_spanning_tree",
            ArborError::Io(_) => "io_error",
            ArborError::Json(_) => "json_error",
            ArborError::FailedOperationWithTarget { .. } => "failed_operation",
            ArborError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for arbor operations
pub type Result<T> = std::result::Result<T, ArborError>;
