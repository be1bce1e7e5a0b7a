//! Process-wide shared opening book.

use crate::book::OpeningBook;
use crate::error::BookResult;
use ecobook_source::OpeningSource;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// The shared-instance slot.
///
/// `None` until the first successful load. All access goes through
/// [`shared_instance`] and [`reset_shared`]; the slot is never exposed as
/// ambient mutable state.
static SHARED: RwLock<Option<Arc<OpeningBook>>> = RwLock::new(None);

/// Returns the process-wide shared opening book, loading it on first call.
///
/// The first caller's `source` is consumed to build the book; once the
/// slot is populated, subsequent callers get the cached instance and
/// their `source` argument is ignored. Initialization is double-checked
/// under a write lock, so `load` executes at most once even when multiple
/// threads race on first access, and no caller ever observes a partially
/// populated index.
///
/// # Errors
///
/// A failed load is surfaced to the caller and leaves the slot empty, so
/// a later call retries from scratch rather than caching the failure or
/// silently degrading to an empty book.
pub fn shared_instance(source: &dyn OpeningSource) -> BookResult<Arc<OpeningBook>> {
    if let Some(book) = SHARED.read().as_ref() {
        return Ok(Arc::clone(book));
    }

    let mut slot = SHARED.write();
    // Another thread may have won the race while we waited for the lock.
    if let Some(book) = slot.as_ref() {
        debug!("shared book already initialized by concurrent caller");
        return Ok(Arc::clone(book));
    }

    let book = Arc::new(OpeningBook::load(source)?);
    *slot = Some(Arc::clone(&book));
    Ok(book)
}

/// Clears the shared slot so the next [`shared_instance`] call reloads.
///
/// Intended for test teardown; the rebuild is a full reload from the
/// source handed to the next caller, never an incremental mutation.
/// Existing `Arc` handles remain valid and keep the old book alive.
pub fn reset_shared() {
    *SHARED.write() = None;
}
