//! Central error types for treemetrics.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic
//! `Display` and `From` implementations.
//!
//! The metrics core itself is fail-soft and never constructs these errors:
//! malformed or partially-shaped trees degrade to zero-contribution counts.
//! Errors only surface at the input boundary (file reads, ESTree JSON
//! deserialization) and from argument validation in the analysis drivers.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// IO operation failed (without path context - prefer IoWithPath when path is available)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO operation failed with path context for better error messages
    #[error("IO error at {path}: {error}")]
    IoWithPath {
        error: std::io::Error,
        path: PathBuf,
    },

    /// ESTree JSON deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Invalid argument provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results using MetricsError.
pub type Result<T> = std::result::Result<T, MetricsError>;

impl MetricsError {
    /// Create an IO error with path context.
    ///
    /// Use this when reading files so the failing path shows up in the
    /// error message.
    #[inline]
    pub fn io_with_path(error: std::io::Error, path: impl AsRef<Path>) -> Self {
        MetricsError::IoWithPath {
            error,
            path: path.as_ref().to_path_buf(),
        }
    }
}
