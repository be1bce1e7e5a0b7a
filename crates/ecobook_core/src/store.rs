//! Immutable opening record store.

use crate::error::{BookError, BookResult};
use crate::record::OpeningRecord;
use crate::types::PositionKey;
use ecobook_source::OpeningEntry;
use std::collections::HashMap;
use tracing::info;

/// The loaded-once collection of opening records.
///
/// `OpeningStore` holds records in load order and maintains a hash index
/// from position key to the records filed under it. Because Zobrist-style
/// keys can collide and some encodings reuse keys for alias openings, the
/// index maps each key to an **ordered** list of record positions; within
/// a bucket, load order is preserved so the first-loaded record wins any
/// single-result tie-break.
///
/// After construction the store is immutable; concurrent unsynchronized
/// reads are always safe.
pub struct OpeningStore {
    /// Records in load order.
    records: Vec<OpeningRecord>,
    /// Key to record positions, each bucket in load order.
    index: HashMap<PositionKey, Vec<u32>>,
}

impl OpeningStore {
    /// Builds a store from raw source entries.
    ///
    /// The whole load is rejected on the first invalid entry (an entry
    /// with an empty `name` or `eco` field); there is no per-entry skip
    /// mode. An empty entry sequence is a valid, empty store.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidEntry` naming the offending entry's
    /// position in source order.
    pub fn from_entries(entries: Vec<OpeningEntry>) -> BookResult<Self> {
        let mut records = Vec::with_capacity(entries.len());
        let mut index: HashMap<PositionKey, Vec<u32>> = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(BookError::invalid_entry(position, "empty opening name"));
            }
            if entry.eco.trim().is_empty() {
                return Err(BookError::invalid_entry(position, "empty ECO code"));
            }

            let key = PositionKey::new(entry.key);
            let record = OpeningRecord::new(key, entry.name, entry.variation, entry.eco);

            index.entry(key).or_default().push(position as u32);
            records.push(record);
        }

        info!(
            records = records.len(),
            keys = index.len(),
            "opening store built"
        );

        Ok(Self { records, index })
    }

    /// Returns all records, in load order.
    ///
    /// Repeated calls yield the same sequence for the lifetime of the
    /// store.
    #[must_use]
    pub fn all(&self) -> &[OpeningRecord] {
        &self.records
    }

    /// Returns all records filed under `key`, in load order.
    ///
    /// An empty result means the key is outside the book.
    #[must_use]
    pub fn records_for_key(&self, key: PositionKey) -> Vec<&OpeningRecord> {
        match self.index.get(&key) {
            Some(positions) => positions
                .iter()
                .map(|&position| &self.records[position as usize])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the first-loaded record filed under `key`, if any.
    #[must_use]
    pub fn first_for_key(&self, key: PositionKey) -> Option<&OpeningRecord> {
        self.index
            .get(&key)
            .and_then(|positions| positions.first())
            .map(|&position| &self.records[position as usize])
    }

    /// Returns the number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of distinct keys in the index.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.index.len()
    }
}

impl std::fmt::Debug for OpeningStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpeningStore")
            .field("records", &self.records.len())
            .field("keys", &self.index.len())
            .finish_non_exhaustive()
    }
}
