//! Error types and exit codes for qna
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, failed validation)
//! - 3: Data/store error (missing store, unknown record, failed retrieval)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for QnaError {
    fn from(err: rusqlite::Error) -> Self {
        QnaError::Other(err.to_string())
    }
}

/// Errors that can occur during qna operations
#[derive(Error, Debug)]
pub enum QnaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("Question not found: {id}")]
    RecordNotFound { id: String },

    #[error("failed to fetch questions: {reason}")]
    RetrievalFailure { reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl QnaError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        QnaError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        QnaError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        QnaError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap any store read failure as a retrieval failure
    pub fn retrieval(error: impl std::fmt::Display) -> Self {
        QnaError::RetrievalFailure {
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            QnaError::UnknownFormat(_)
            | QnaError::UsageError(_)
            | QnaError::InvalidValue { .. }
            | QnaError::Validation { .. } => ExitCode::Usage,

            QnaError::StoreNotFound { .. }
            | QnaError::InvalidStore { .. }
            | QnaError::RecordNotFound { .. }
            | QnaError::RetrievalFailure { .. }
            | QnaError::AlreadyExists { .. } => ExitCode::Data,

            QnaError::Io(_)
            | QnaError::Json(_)
            | QnaError::Toml(_)
            | QnaError::FailedOperation { .. }
            | QnaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            QnaError::UnknownFormat(_) => "unknown_format",
            QnaError::UsageError(_) => "usage_error",
            QnaError::InvalidValue { .. } => "invalid_value",
            QnaError::Validation { .. } => "validation",
            QnaError::StoreNotFound { .. } => "store_not_found",
            QnaError::InvalidStore { .. } => "invalid_store",
            QnaError::RecordNotFound { .. } => "record_not_found",
            QnaError::RetrievalFailure { .. } => "retrieval_failure",
            QnaError::AlreadyExists { .. } => "already_exists",
            QnaError::Io(_) => "io_error",
            QnaError::Json(_) => "json_error",
            QnaError::Toml(_) => "toml_error",
            QnaError::FailedOperation { .. } => "failed_operation",
            QnaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    ///
    /// Validation errors additionally carry the individual messages under `errors`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let QnaError::Validation { errors } = self {
            error_obj["errors"] = serde_json::json!(errors);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for qna operations
pub type Result<T> = std::result::Result<T, QnaError>;
