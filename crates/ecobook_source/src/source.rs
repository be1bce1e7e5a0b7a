//! Opening source trait definition.

use crate::entry::OpeningEntry;
use crate::error::SourceResult;

/// A provider of raw opening entries for ecobook.
///
/// Sources are **opaque entry providers**. They yield the book's contents
/// as a flat sequence; ecobook owns all indexing, collision handling, and
/// validation beyond basic shape.
///
/// # Invariants
///
/// - `provide` yields a finite sequence
/// - Repeated calls yield the same entries in the same order (restartable)
/// - An empty sequence is a valid result, not an error
/// - Sources must be `Send + Sync` so the shared book can be initialized
///   from any thread
///
/// # Implementors
///
/// - [`super::InMemorySource`] - For testing
/// - [`super::FileSource`] - For loading a bundled book file
pub trait OpeningSource: Send + Sync {
    /// Provides all opening entries, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source cannot be reached or opened (`SourceError::Unavailable`)
    /// - The data violates the expected shape (`SourceError::Malformed`)
    /// - An I/O error occurs
    fn provide(&self) -> SourceResult<Vec<OpeningEntry>>;
}
