//! # ecobook core
//!
//! Opening book classification engine for ecobook.
//!
//! This crate provides:
//! - An immutable, loaded-once store of opening records
//! - A key-indexed lookup engine with a deterministic collision policy
//! - A process-wide shared book with exactly-once lazy initialization
//!
//! Position keys are Zobrist-style hashes and are not collision-free:
//! the index maps each key to an ordered list of records, and single-record
//! lookups break ties by load order (first-loaded wins).
//!
//! ## Example
//!
//! ```rust
//! use ecobook_core::OpeningBook;
//! use ecobook_source::{InMemorySource, OpeningEntry};
//!
//! let source = InMemorySource::new(vec![
//!     OpeningEntry::new(1, "Sicilian Defense", None, "B20"),
//!     OpeningEntry::new(2, "French Defense", None, "C00"),
//! ]);
//!
//! let book = OpeningBook::load(&source).unwrap();
//! assert_eq!(
//!     book.description_for_key(1).as_deref(),
//!     Some("B20 Sicilian Defense"),
//! );
//! assert!(book.description_for_key(3).is_none());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod error;
mod record;
mod shared;
mod store;
mod types;

pub use book::OpeningBook;
pub use error::{BookError, BookResult};
pub use record::OpeningRecord;
pub use shared::{reset_shared, shared_instance};
pub use store::OpeningStore;
pub use types::PositionKey;
