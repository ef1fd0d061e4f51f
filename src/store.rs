//! Single-owner holder of the cached feed state.
//!
//! The store owns exactly one [`CacheSnapshot`] plus the per-request
//! flags the UI layer reads (loading, last error) and the article
//! selection.  Only the controller mutates it, which keeps every state
//! transition in one call path:
//!
//! ```text
//! Idle ──begin_request()──► Pending ──apply()────────► Idle (fulfilled)
//!                                   └─record_error()─► Idle (rejected)
//! ```

use crate::article::Article;
use crate::snapshot::CacheSnapshot;

/// Owns the current snapshot and request flags.
#[derive(Debug, Default)]
pub struct CacheStore {
    snapshot: CacheSnapshot,
    /// The article the caller has opened, if any.  A clone rather than
    /// an index: the selection survives merges and `clear()`.
    selected: Option<Article>,
    /// True while a fetch is in flight.
    loading: bool,
    /// Error from the most recent rejected fetch; cleared on the next
    /// request.
    error: Option<String>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current snapshot.
    pub fn snapshot(&self) -> &CacheSnapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter the Pending state: a fetch has been issued.
    pub(crate) fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fulfil the pending request with a merged snapshot.
    pub(crate) fn apply(&mut self, snapshot: CacheSnapshot) {
        self.snapshot = snapshot;
        self.loading = false;
    }

    /// Reject the pending request.  The snapshot is left untouched so
    /// previously fetched articles stay visible.
    pub(crate) fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Reset to the initial empty snapshot.
    ///
    /// The selection is kept: the caller may still be viewing an
    /// article while re-searching behind it.
    pub fn clear(&mut self) {
        self.snapshot = CacheSnapshot::default();
        self.error = None;
    }

    pub fn select(&mut self, article: Article) {
        self.selected = Some(article);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Article> {
        self.selected.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
