//! The materialized feed state.
//!
//! A [`CacheSnapshot`] is everything the controller knows about the
//! current feed: the merged article list, where pagination stands, which
//! filters produced it, and when it was last refreshed.  It is a plain
//! value — the [`crate::store::CacheStore`] owns the live copy and the
//! merge logic builds replacements.

use chrono::{DateTime, Utc};

use crate::article::{Article, FilterSet};

/// The current cached feed state.
///
/// ## Invariants
///
/// * No two articles share an `id`.
/// * `current_page == 0` means `articles` is exactly the most recent
///   page-0 result, not a merge.
/// * `next_page == None` means the upstream has no further pages.
/// * `last_fetched_at == None` only in the initial or cleared state.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    /// Merged articles in arrival order.
    pub articles: Vec<Article>,
    /// Total result count reported by the API (across all pages).
    pub total_results: u64,
    /// Opaque cursor for the next page, if one exists.
    pub next_page: Option<String>,
    /// When the snapshot was last refreshed from the network.
    pub last_fetched_at: Option<DateTime<Utc>>,
    /// The filters the snapshot was built with.
    pub active_filters: FilterSet,
    /// Index of the deepest page merged into `articles`.
    pub current_page: u32,
}

impl Default for CacheSnapshot {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            total_results: 0,
            next_page: None,
            last_fetched_at: None,
            active_filters: FilterSet::default(),
            current_page: 0,
        }
    }
}

impl CacheSnapshot {
    /// Look up an article by id.
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}
