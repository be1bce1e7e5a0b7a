//! File-backed opening source.

use crate::entry::OpeningEntry;
use crate::error::{SourceError, SourceResult};
use crate::source::OpeningSource;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of one book entry.
///
/// Position keys are hexadecimal strings (with or without a `0x` prefix)
/// because JSON numbers cannot carry full 64-bit precision.
#[derive(Debug, Deserialize)]
struct RawEntry {
    key: String,
    name: String,
    #[serde(default)]
    variation: Option<String>,
    eco: String,
}

/// A file-backed opening source.
///
/// Reads a JSON array of entries from a book file bundled with the host
/// application, for example:
///
/// ```json
/// [
///   { "key": "0x2f6b38c011a4d9e7", "name": "Sicilian Defense", "eco": "B20" },
///   { "key": "0x91c44aa0357b02de", "name": "French Defense", "eco": "C00" }
/// ]
/// ```
///
/// An empty array is a valid, empty book. The file is read in full on
/// every `provide` call; the consuming book loads exactly once, so no
/// caching happens here.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source for the given book file path.
    ///
    /// The file is not opened until [`OpeningSource::provide`] is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the underlying book file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_key(raw: &str) -> SourceResult<u64> {
        let digits = raw.strip_prefix("0x").unwrap_or(raw);
        u64::from_str_radix(digits, 16)
            .map_err(|e| SourceError::malformed(format!("invalid position key {raw:?}: {e}")))
    }
}

impl OpeningSource for FileSource {
    fn provide(&self) -> SourceResult<Vec<OpeningEntry>> {
        let file = File::open(&self.path)
            .map_err(|e| SourceError::unavailable(&self.path, e.to_string()))?;

        let raw: Vec<RawEntry> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                SourceError::Io(e.into())
            } else {
                SourceError::malformed(format!("{}: {e}", self.path.display()))
            }
        })?;

        let mut entries = Vec::with_capacity(raw.len());
        for raw_entry in raw {
            entries.push(OpeningEntry {
                key: Self::parse_key(&raw_entry.key)?,
                name: raw_entry.name,
                variation: raw_entry.variation,
                eco: raw_entry.eco,
            });
        }

        debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "book file parsed"
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_book(contents: &str) -> (TempDir, FileSource) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, FileSource::new(path))
    }

    #[test]
    fn parses_entries_in_file_order() {
        let (_dir, source) = write_book(
            r#"[
                { "key": "0x2f6b38c011a4d9e7", "name": "Sicilian Defense", "eco": "B20" },
                { "key": "91c44aa0357b02de", "name": "French Defense", "eco": "C00" },
                { "key": "0x0c12", "name": "Sicilian Defense",
                  "variation": "Smith-Morra Gambit", "eco": "B21" }
            ]"#,
        );

        let entries = source.provide().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].key, 0x2f6b_38c0_11a4_d9e7);
        assert_eq!(entries[1].key, 0x91c4_4aa0_357b_02de);
        assert_eq!(entries[2].variation.as_deref(), Some("Smith-Morra Gambit"));
    }

    #[test]
    fn empty_array_is_a_valid_empty_book() {
        let (_dir, source) = write_book("[]");
        assert!(source.provide().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        let err = source.provide().unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let (_dir, source) = write_book(r#"[ { "key": "0x1", "eco": "B20" } ]"#);

        let err = source.provide().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[test]
    fn non_array_document_is_malformed() {
        let (_dir, source) = write_book(r#"{ "key": "0x1" }"#);

        let err = source.provide().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[test]
    fn bad_hex_key_is_malformed() {
        let (_dir, source) =
            write_book(r#"[ { "key": "0xZZ", "name": "Bogus", "eco": "A00" } ]"#);

        let err = source.provide().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }

    #[test]
    fn full_width_keys_round_trip() {
        let (_dir, source) = write_book(
            r#"[ { "key": "0xffffffffffffffff", "name": "Edge", "eco": "A00" } ]"#,
        );

        let entries = source.provide().unwrap();
        assert_eq!(entries[0].key, u64::MAX);
    }
}
