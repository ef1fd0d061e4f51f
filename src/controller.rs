//! The feed controller — the crate's public orchestration surface.
//!
//! One [`FeedController`] instance owns the [`CacheStore`] and a
//! [`RemoteClient`] implementation, and wires the decision and merge
//! steps together:
//!
//! ```text
//! request_feed ──► decide ──┬─ ServeCache ──────────────► snapshot
//!                           └─ Fetch ─► client ─► merge ─► snapshot
//! ```
//!
//! There is deliberately no shared global state: callers hold the
//! controller wherever they need it.  Mutation goes through `&mut self`,
//! so overlapping requests serialize on the borrow and the last applied
//! response simply overwrites prior state — no causal ordering between
//! overlapping requests is promised beyond that.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::article::{Article, FilterSet};
use crate::client::{FetchError, RemoteClient};
use crate::decision::{decide, Decision};
use crate::merge::merge;
use crate::snapshot::CacheSnapshot;
use crate::store::CacheStore;

/// Decides, fetches, and merges on behalf of a UI layer.
pub struct FeedController<C: RemoteClient> {
    client: C,
    store: CacheStore,
}

impl<C: RemoteClient> FeedController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            store: CacheStore::new(),
        }
    }

    /// The current snapshot, whatever state it is in.
    pub fn snapshot(&self) -> &CacheSnapshot {
        self.store.snapshot()
    }

    /// True while a fetch issued by this controller is in flight.
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Error from the most recent rejected fetch, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.store.last_error()
    }

    /// Serve `page` of the feed for `filters`, fetching only when the
    /// cache cannot satisfy the request.
    ///
    /// On a fetch failure the error is recorded on the store (previously
    /// fetched articles stay visible) and returned; the caller may simply
    /// re-issue the request.  A [`FetchError::Validation`] is returned
    /// before any network call and records nothing.
    pub fn request_feed(
        &mut self,
        filters: &FilterSet,
        page: u32,
    ) -> Result<&CacheSnapshot, FetchError> {
        self.request_feed_at(filters, page, Utc::now())
    }

    fn request_feed_at(
        &mut self,
        filters: &FilterSet,
        page: u32,
        now: DateTime<Utc>,
    ) -> Result<&CacheSnapshot, FetchError> {
        let page_token = match decide(filters, page, self.store.snapshot(), now)? {
            Decision::ServeCache => {
                debug!("serving page {page} from cache");
                return Ok(self.store.snapshot());
            }
            Decision::Fetch { page_token } => page_token,
        };

        info!("fetching page {page} (query: {:?})", filters.query);
        self.store.begin_request();

        match self.client.fetch_page(filters, page_token.as_deref()) {
            Ok(response) => {
                let merged = merge(self.store.snapshot(), filters, page, response, now);
                self.store.apply(merged);
                Ok(self.store.snapshot())
            }
            Err(e) => {
                warn!("fetch failed: {e}");
                self.store.record_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Reset to the empty snapshot so the next request fetches fresh.
    pub fn clear_feed(&mut self) {
        self.store.clear();
    }

    /// Mark the article with `id` as opened.  Returns false when no such
    /// article is in the current snapshot.
    pub fn select_article(&mut self, id: &str) -> bool {
        match self.store.snapshot().article(id).cloned() {
            Some(article) => {
                self.store.select(article);
                true
            }
            None => false,
        }
    }

    pub fn deselect_article(&mut self) {
        self.store.deselect();
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.store.selected()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
