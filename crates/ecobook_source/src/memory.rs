//! In-memory opening source for testing.

use crate::entry::OpeningEntry;
use crate::error::SourceResult;
use crate::source::OpeningSource;

/// An in-memory opening source.
///
/// This source holds its entries directly and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Fixture books compiled into the host
///
/// # Example
///
/// ```rust
/// use ecobook_source::{InMemorySource, OpeningEntry, OpeningSource};
///
/// let source = InMemorySource::new(vec![
///     OpeningEntry::new(1, "Sicilian Defense", None, "B20"),
/// ]);
/// assert_eq!(source.provide().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
    entries: Vec<OpeningEntry>,
}

impl InMemorySource {
    /// Creates a new in-memory source with the given entries.
    #[must_use]
    pub fn new(entries: Vec<OpeningEntry>) -> Self {
        Self { entries }
    }

    /// Creates a new empty in-memory source.
    ///
    /// Useful for testing the empty-book degraded mode.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of entries this source holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this source holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OpeningSource for InMemorySource {
    fn provide(&self) -> SourceResult<Vec<OpeningEntry>> {
        Ok(self.entries.clone())
    }
}
