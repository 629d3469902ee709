//! Error types and exit codes for compass
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed command text)
//! - 3: Data error (missing or unparsable data files, unknown student/class)
//!
//! The graph engine never produces these; its queries report "no result"
//! through `Option`, `bool` and [`crate::graph::EdgeStatus`].

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the compass binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing files, invalid rows (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during compass operations
#[derive(Error, Debug)]
pub enum CompassError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("malformed command: {0}")]
    MalformedCommand(String),

    // Data errors (exit code 3)
    #[error("data files not found (searched {searched:?})")]
    DataNotFound { searched: Vec<PathBuf> },

    #[error("invalid row in {path:?} at line {line}: {reason}")]
    InvalidRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{0}")]
    Rejected(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CompassError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CompassError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CompassError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        CompassError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CompassError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a row the loader could not interpret
    pub fn invalid_row(path: impl Into<PathBuf>, line: u64, reason: impl Into<String>) -> Self {
        CompassError::InvalidRow {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CompassError::UnknownFormat(_)
            | CompassError::UsageError(_)
            | CompassError::MalformedCommand(_) => ExitCode::Usage,

            CompassError::DataNotFound { .. }
            | CompassError::InvalidRow { .. }
            | CompassError::InvalidValue { .. }
            | CompassError::AlreadyExists { .. }
            | CompassError::NotFound { .. }
            | CompassError::Rejected(_) => ExitCode::Data,

            CompassError::Io(_)
            | CompassError::Csv(_)
            | CompassError::Json(_)
            | CompassError::Toml(_)
            | CompassError::FailedOperationWithTarget { .. }
            | CompassError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CompassError::UnknownFormat(_) => "unknown_format",
            CompassError::UsageError(_) => "usage_error",
            CompassError::MalformedCommand(_) => "malformed_command",
            CompassError::DataNotFound { .. } => "data_not_found",
            CompassError::InvalidRow { .. } => "invalid_row",
            CompassError::InvalidValue { .. } => "invalid_value",
            CompassError::AlreadyExists { .. } => "already_exists",
            CompassError::NotFound { .. } => "not_found",
            CompassError::Rejected(_) => "rejected",
            CompassError::Io(_) => "io_error",
            CompassError::Csv(_) => "csv_error",
            CompassError::Json(_) => "json_error",
            CompassError::Toml(_) => "toml_error",
            CompassError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CompassError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for `--format json`
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
        .to_string()
    }
}

/// Result type alias for compass operations
pub type Result<T> = std::result::Result<T, CompassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CompassError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            CompassError::MalformedCommand("frobnicate".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            CompassError::DataNotFound { searched: vec![] }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            CompassError::not_found("student", "12345678").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            CompassError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = CompassError::invalid_row("data/edges.csv", 4, "bad weight");
        let value: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
        assert_eq!(value["error"]["code"], 3);
        assert_eq!(value["error"]["type"], "invalid_row");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("line 4"));
    }
}
