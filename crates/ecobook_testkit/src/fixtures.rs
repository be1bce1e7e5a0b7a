//! Test fixtures and book helpers.
//!
//! Provides canonical small entry sets and helpers for building books
//! from in-memory or on-disk sources.

use ecobook_core::{BookResult, OpeningBook};
use ecobook_source::{FileSource, InMemorySource, OpeningEntry};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// A minimal two-opening fixture set: Sicilian and French.
#[must_use]
pub fn sample_entries() -> Vec<OpeningEntry> {
    vec![
        OpeningEntry::new(1, "Sicilian Defense", None, "B20"),
        OpeningEntry::new(2, "French Defense", None, "C00"),
    ]
}

/// A fixture set with a colliding alias pair on one key.
///
/// The two records under key `5` are in load order, so first-match
/// policies can be asserted against the plain "Sicilian Defense" record.
#[must_use]
pub fn colliding_entries() -> Vec<OpeningEntry> {
    vec![
        OpeningEntry::new(5, "Sicilian Defense", None, "B20"),
        OpeningEntry::new(5, "Sicilian Defense", Some("Smith-Morra Gambit"), "B21"),
        OpeningEntry::new(6, "Caro-Kann Defense", None, "B10"),
    ]
}

/// Loads a book from the [`sample_entries`] fixture.
///
/// # Errors
///
/// Propagates the load error; the fixture itself is always well-formed.
pub fn sample_book() -> BookResult<OpeningBook> {
    OpeningBook::load(&InMemorySource::new(sample_entries()))
}

/// A book file on disk with automatic cleanup.
pub struct BookFile {
    /// File source pointing at the written book file.
    pub source: FileSource,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl BookFile {
    /// Writes `entries` as a JSON book file and returns a ready source.
    ///
    /// Keys are encoded as hex strings, matching the production format.
    #[must_use]
    pub fn new(entries: &[OpeningEntry]) -> Self {
        let rows: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "key": format!("{:#x}", e.key),
                    "name": e.name,
                    "variation": e.variation,
                    "eco": e.eco,
                })
            })
            .collect();

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("book.json");
        fs::write(&path, serde_json::to_vec_pretty(&rows).expect("Failed to encode book"))
            .expect("Failed to write book file");

        Self {
            source: FileSource::new(path),
            _temp_dir: temp_dir,
        }
    }
}
