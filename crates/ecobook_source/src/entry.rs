//! Raw opening entry as yielded by a source.

/// One raw opening entry from a data source.
///
/// Entries are plain data: the source does not validate names or resolve
/// key collisions. Interpretation belongs to the book that consumes them.
///
/// The `key` is a Zobrist-style 64-bit position hash. Distinct openings
/// may share a key, either by hash collision or because the source
/// intentionally reuses a key for alias openings; consumers must not
/// assume uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningEntry {
    /// Position hash identifying the opening.
    pub key: u64,
    /// Human-readable opening name, e.g. "Sicilian Defense".
    pub name: String,
    /// Finer-grained variation label, if any.
    pub variation: Option<String>,
    /// ECO-style classification code, e.g. "B20".
    pub eco: String,
}

impl OpeningEntry {
    /// Creates a new opening entry.
    pub fn new(
        key: u64,
        name: impl Into<String>,
        variation: Option<&str>,
        eco: impl Into<String>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            variation: variation.map(str::to_owned),
            eco: eco.into(),
        }
    }
}
