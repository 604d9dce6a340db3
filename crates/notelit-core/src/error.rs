//! Error types and exit codes for notelit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing note, unreadable cache, etc.)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the notelit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing note, unreadable cache (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notelit operations
#[derive(Error, Debug)]
pub enum NotelitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown sort key: {0} (expected: manual, title, newest, or oldest)")]
    UnknownSortKey(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("invalid cache file {path:?}: {reason}")]
    InvalidCache { path: PathBuf, reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    Other(String),
}

impl NotelitError {
    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        NotelitError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NotelitError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotelitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            NotelitError::UnknownFormat(_)
            | NotelitError::UnknownSortKey(_)
            | NotelitError::UsageError(_)
            | NotelitError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            NotelitError::NoteNotFound { .. }
            | NotelitError::InvalidCache { .. }
            | NotelitError::AlreadyExists { .. }
            | NotelitError::NotFound { .. } => ExitCode::Data,

            // Generic failures
            NotelitError::Io(_)
            | NotelitError::Json(_)
            | NotelitError::Toml(_)
            | NotelitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NotelitError::UnknownFormat(_) => "unknown_format",
            NotelitError::UnknownSortKey(_) => "unknown_sort_key",
            NotelitError::UsageError(_) => "usage_error",
            NotelitError::NoteNotFound { .. } => "note_not_found",
            NotelitError::InvalidCache { .. } => "invalid_cache",
            NotelitError::AlreadyExists { .. } => "already_exists",
            NotelitError::NotFound { .. } => "not_found",
            NotelitError::Io(_) => "io_error",
            NotelitError::Json(_) => "json_error",
            NotelitError::Toml(_) => "toml_error",
            NotelitError::InvalidValue { .. } => "invalid_value",
            NotelitError::Other(_) => "other",
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

/// Result type alias for notelit operations
pub type Result<T> = std::result::Result<T, NotelitError>;
