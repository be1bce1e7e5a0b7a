//! Error types for the opening book.

use thiserror::Error;

/// Result type for book operations.
pub type BookResult<T> = Result<T, BookError>;

/// Errors that can occur while loading the opening book.
///
/// Lookups never produce an error: a key outside the book is an expected
/// case and is reported as `None` or an empty sequence.
#[derive(Debug, Error)]
pub enum BookError {
    /// The data source failed to provide entries.
    #[error("source error: {0}")]
    Source(#[from] ecobook_source::SourceError),

    /// An entry from the source violates a book invariant.
    #[error("invalid entry at index {index}: {message}")]
    InvalidEntry {
        /// Zero-based position of the entry in source order.
        index: usize,
        /// Description of the violation.
        message: String,
    },
}

impl BookError {
    /// Creates an invalid-entry error.
    pub fn invalid_entry(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            index,
            message: message.into(),
        }
    }
}
