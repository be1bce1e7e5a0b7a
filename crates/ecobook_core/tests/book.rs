//! End-to-end tests: file source through book lookup.

use ecobook_core::{BookError, OpeningBook};
use ecobook_source::{FileSource, SourceError};
use std::fs;
use tempfile::TempDir;

fn book_from(contents: &str) -> (TempDir, ecobook_core::BookResult<OpeningBook>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, contents).unwrap();
    let result = OpeningBook::load(&FileSource::new(path));
    (dir, result)
}

#[test]
fn round_trip_from_book_file() {
    let (_dir, result) = book_from(
        r#"[
            { "key": "0x1", "name": "Sicilian Defense", "eco": "B20" },
            { "key": "0x2", "name": "French Defense", "eco": "C00" }
        ]"#,
    );
    let book = result.unwrap();

    let description = book.description_for_key(1).unwrap();
    assert!(description.contains("B20"));
    assert!(description.contains("Sicilian Defense"));

    assert!(book.description_for_key(3).is_none());

    let names: Vec<&str> = book.all_values().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["Sicilian Defense", "French Defense"]);
}

#[test]
fn empty_book_file_is_not_an_error() {
    let (_dir, result) = book_from("[]");
    let book = result.unwrap();

    assert!(book.is_empty());
    assert!(book.description_for_key(1).is_none());
}

#[test]
fn missing_book_file_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let source = FileSource::new(dir.path().join("nowhere.json"));

    let err = OpeningBook::load(&source).unwrap_err();
    assert!(matches!(
        err,
        BookError::Source(SourceError::Unavailable { .. })
    ));
}

#[test]
fn malformed_book_file_fails_the_load() {
    let (_dir, result) = book_from(r#"[ { "name": "No key here" } ]"#);

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        BookError::Source(SourceError::Malformed { .. })
    ));
}

#[test]
fn aliased_keys_in_file_keep_file_order() {
    let (_dir, result) = book_from(
        r#"[
            { "key": "0xab", "name": "Sicilian Defense", "eco": "B20" },
            { "key": "0xab", "name": "Sicilian Defense",
              "variation": "Smith-Morra Gambit declined", "eco": "B21" }
        ]"#,
    );
    let book = result.unwrap();

    assert_eq!(
        book.description_for_key(0xab).as_deref(),
        Some("B20 Sicilian Defense")
    );
    assert_eq!(book.openings_for_key(0xab).len(), 2);
}
