//! # ecobook testkit
//!
//! Test utilities for ecobook.
//!
//! Provides canonical fixture books and proptest strategies shared by
//! the ecobook crates' tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
