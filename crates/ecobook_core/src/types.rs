//! Core type definitions for ecobook.

use std::fmt;

/// A 64-bit Zobrist-style hash of a chess position.
///
/// Keys summarize a board position for fast equality lookup. They are set
/// at load time and never mutated. Keys are **not** guaranteed unique:
/// distinct positions can collide, and some book encodings intentionally
/// reuse a key for alias openings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey(pub u64);

impl PositionKey {
    /// Creates a new position key.
    #[must_use]
    pub const fn new(key: u64) -> Self {
        Self(key)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for PositionKey {
    fn from(key: u64) -> Self {
        Self(key)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_display_is_fixed_width_hex() {
        let key = PositionKey::new(0x2f6b);
        assert_eq!(format!("{key}"), "0000000000002f6b");
    }

    #[test]
    fn key_from_u64() {
        let key: PositionKey = 42u64.into();
        assert_eq!(key.as_u64(), 42);
    }
}
