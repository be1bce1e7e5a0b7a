//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random opening entries that
//! maintain the book's load invariants (non-empty name and ECO code).

use ecobook_source::OpeningEntry;
use proptest::prelude::*;

/// Strategy for generating valid opening names.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{2,12}( [A-Z][a-z]{2,12}){0,2}").expect("Invalid regex")
}

/// Strategy for generating valid ECO codes (letter A-E plus two digits).
pub fn eco_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-E][0-9]{2}").expect("Invalid regex")
}

/// Strategy for generating a single valid opening entry.
pub fn entry_strategy() -> impl Strategy<Value = OpeningEntry> {
    (
        any::<u64>(),
        name_strategy(),
        prop::option::of(name_strategy()),
        eco_strategy(),
    )
        .prop_map(|(key, name, variation, eco)| OpeningEntry {
            key,
            name,
            variation,
            eco,
        })
}

/// Strategy for generating a batch of valid opening entries.
///
/// Keys are unconstrained, so batches routinely contain collisions -
/// exactly the case the book's tie-break policy must survive.
pub fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<OpeningEntry>> {
    prop::collection::vec(entry_strategy(), 0..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobook_core::OpeningBook;
    use ecobook_source::InMemorySource;

    proptest! {
        #[test]
        fn generated_entries_always_load(entries in entries_strategy(32)) {
            let book = OpeningBook::load(&InMemorySource::new(entries.clone())).unwrap();
            prop_assert_eq!(book.len(), entries.len());
        }

        #[test]
        fn first_loaded_wins_on_any_collision(entries in entries_strategy(32)) {
            let book = OpeningBook::load(&InMemorySource::new(entries.clone())).unwrap();

            for entry in &entries {
                let expected_first = entries
                    .iter()
                    .find(|e| e.key == entry.key)
                    .expect("entry exists");
                let description = book
                    .description_for_key(entry.key)
                    .expect("loaded key must resolve");
                prop_assert!(description.contains(&expected_first.name));
                prop_assert!(description.contains(&expected_first.eco));
            }
        }
    }
}
