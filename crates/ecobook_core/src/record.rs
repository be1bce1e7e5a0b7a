//! Opening record.

use crate::types::PositionKey;

/// A single classified opening.
///
/// Records are immutable once inserted into the store. Callers receive
/// read-only references; no component outside the book may hold a mutable
/// reference to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningRecord {
    key: PositionKey,
    name: String,
    variation: Option<String>,
    eco: String,
}

impl OpeningRecord {
    pub(crate) fn new(
        key: PositionKey,
        name: String,
        variation: Option<String>,
        eco: String,
    ) -> Self {
        Self {
            key,
            name,
            variation,
            eco,
        }
    }

    /// Returns the position key this record is indexed under.
    #[must_use]
    pub fn key(&self) -> PositionKey {
        self.key
    }

    /// Returns the opening name, e.g. "Sicilian Defense".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the variation label, if any.
    #[must_use]
    pub fn variation(&self) -> Option<&str> {
        self.variation.as_deref()
    }

    /// Returns the ECO-style classification code, e.g. "B20".
    #[must_use]
    pub fn eco(&self) -> &str {
        &self.eco
    }

    /// Renders the record as a display description.
    ///
    /// Format is `"ECO name"` or `"ECO name, variation"`, e.g.
    /// `"B21 Sicilian Defense, Smith-Morra Gambit"`.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.variation {
            Some(variation) => format!("{} {}, {}", self.eco, self.name, variation),
            None => format!("{} {}", self.eco, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_without_variation() {
        let record = OpeningRecord::new(
            PositionKey::new(1),
            "Sicilian Defense".to_owned(),
            None,
            "B20".to_owned(),
        );
        assert_eq!(record.description(), "B20 Sicilian Defense");
    }

    #[test]
    fn description_with_variation() {
        let record = OpeningRecord::new(
            PositionKey::new(1),
            "Sicilian Defense".to_owned(),
            Some("Smith-Morra Gambit".to_owned()),
            "B21".to_owned(),
        );
        assert_eq!(
            record.description(),
            "B21 Sicilian Defense, Smith-Morra Gambit"
        );
    }
}
