//! # ecobook source
//!
//! Opening data source trait and implementations for ecobook.
//!
//! This crate provides the lowest-level data abstraction for ecobook.
//! Sources are **opaque entry providers** - they yield raw opening entries
//! and do not interpret position keys or build any index.
//!
//! ## Design Principles
//!
//! - Sources yield a finite, restartable sequence of entries
//! - No knowledge of the lookup index or collision policy
//! - Must be `Send + Sync` so the shared book can be initialized from
//!   any thread
//! - ecobook_core owns all indexing and tie-break interpretation
//!
//! ## Available Sources
//!
//! - [`InMemorySource`] - For testing and embedded fixture data
//! - [`FileSource`] - For loading a book file bundled with the host
//!
//! ## Example
//!
//! ```rust
//! use ecobook_source::{InMemorySource, OpeningEntry, OpeningSource};
//!
//! let source = InMemorySource::new(vec![OpeningEntry::new(
//!     0x2f6b_38c0_11a4_d9e7,
//!     "Sicilian Defense",
//!     None,
//!     "B20",
//! )]);
//! let entries = source.provide().unwrap();
//! assert_eq!(entries.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod error;
mod file;
mod memory;
mod source;

pub use entry::OpeningEntry;
pub use error::{SourceError, SourceResult};
pub use file::FileSource;
pub use memory::InMemorySource;
pub use source::OpeningSource;
