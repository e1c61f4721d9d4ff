//! Error Types
//!
//! Single error type for the whole crate. The analysis pipeline is
//! deliberately forgiving: unreadable source files are skipped at the point
//! of failure and never reach this type. The variants here cover the few
//! places where an operation genuinely cannot continue.
//!
//! `PathNotFound` is special: the CLI boundary renders it as a
//! report-shaped `{"error": ...}` payload with exit code 0 rather than a
//! process failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path does not exist: {path}")]
    PathNotFound { path: String },
}

impl ScoutError {
    /// Create a path-not-found error for the given (unresolved) input path.
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScoutError>;
