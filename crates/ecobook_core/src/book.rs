//! Opening book lookup engine.

use crate::error::BookResult;
use crate::record::OpeningRecord;
use crate::store::OpeningStore;
use crate::types::PositionKey;
use ecobook_source::OpeningSource;
use tracing::info;

/// The opening classification engine.
///
/// `OpeningBook` is the only interface the host uses. It owns the record
/// store exclusively and answers "what opening, if any, corresponds to
/// this position key?" with an O(1) average hash lookup.
///
/// The book is read-only after `load`; every operation is safe for
/// unsynchronized concurrent invocation from any number of threads.
///
/// # Collision Policy
///
/// Position keys are not collision-free. When several records share a key,
/// [`description_for_key`](Self::description_for_key) returns the
/// **first-loaded** record's description (deterministic tie-break by load
/// order), and [`openings_for_key`](Self::openings_for_key) returns all of
/// them in load order.
///
/// # Example
///
/// ```rust
/// use ecobook_core::OpeningBook;
/// use ecobook_source::{InMemorySource, OpeningEntry};
///
/// let source = InMemorySource::new(vec![
///     OpeningEntry::new(1, "Sicilian Defense", None, "B20"),
/// ]);
/// let book = OpeningBook::load(&source)?;
///
/// assert_eq!(book.description_for_key(1).as_deref(), Some("B20 Sicilian Defense"));
/// assert!(book.description_for_key(2).is_none());
/// # Ok::<(), ecobook_core::BookError>(())
/// ```
pub struct OpeningBook {
    store: OpeningStore,
}

impl OpeningBook {
    /// Loads a book from a data source.
    ///
    /// Consumes the source's full entry sequence once and builds the key
    /// index. An empty-but-valid source yields an empty book, which is not
    /// an error: every lookup simply misses.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed, or if
    /// an entry violates a book invariant. Load failures reject the whole
    /// book; there is no partially-loaded state.
    pub fn load(source: &dyn OpeningSource) -> BookResult<Self> {
        let entries = source.provide()?;
        let store = OpeningStore::from_entries(entries)?;

        info!(records = store.len(), "opening book loaded");
        Ok(Self { store })
    }

    /// Returns the description of the opening filed under `key`, if any.
    ///
    /// `None` means the position is outside the known book - an expected,
    /// common case, not an error. On key collision the first-loaded
    /// record wins.
    #[must_use]
    pub fn description_for_key(&self, key: u64) -> Option<String> {
        self.store
            .first_for_key(PositionKey::new(key))
            .map(OpeningRecord::description)
    }

    /// Returns every record filed under `key`, in load order.
    ///
    /// Unlike [`description_for_key`](Self::description_for_key) this
    /// surfaces the collision case explicitly. An empty result signals no
    /// match.
    #[must_use]
    pub fn openings_for_key(&self, key: u64) -> Vec<&OpeningRecord> {
        self.store.records_for_key(PositionKey::new(key))
    }

    /// Returns every known record regardless of key, in load order.
    ///
    /// Intended for bulk display such as a reference browser, not for
    /// classification.
    #[must_use]
    pub fn all_values(&self) -> &[OpeningRecord] {
        self.store.all()
    }

    /// Returns the number of records in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the book holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl std::fmt::Debug for OpeningBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpeningBook")
            .field("records", &self.store.len())
            .finish_non_exhaustive()
    }
}
