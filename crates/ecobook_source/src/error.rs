//! Error types for source operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while providing opening entries.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data source could not be reached or opened.
    #[error("source unavailable: {path}: {reason}")]
    Unavailable {
        /// Path or identifier of the source.
        path: PathBuf,
        /// Description of why the source could not be opened.
        reason: String,
    },

    /// The source data violates the expected shape.
    #[error("source malformed: {detail}")]
    Malformed {
        /// Description of the shape violation.
        detail: String,
    },

    /// An I/O error occurred while reading the source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SourceError {
    /// Creates an unavailable-source error.
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed-source error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }
}
