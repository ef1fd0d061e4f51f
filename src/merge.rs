//! Folding a fetched page into the snapshot.
//!
//! [`merge`] is the only place a [`CacheSnapshot`] is built from a
//! [`PageResponse`].  It is a pure function over values; the store
//! applies its result, and fetch errors never reach it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::debug;

use crate::article::FilterSet;
use crate::client::PageResponse;
use crate::snapshot::CacheSnapshot;

/// Fold one page of results into the snapshot, returning the replacement.
///
/// * `page == 0`: the response replaces the article list wholesale, in
///   response order, and the page cursor resets to 0.
/// * `page > 0`: response articles whose id is already held are dropped
///   (first-seen order wins); the rest are appended in response order.
///   `current_page` advances to `page` only when at least one article
///   was actually appended — a stale or duplicate page must not advance
///   the cursor, or the skipped page could never be recovered.
///
/// Regardless of page, the bookkeeping fields (`total_results`,
/// `next_page`, `last_fetched_at`, `active_filters`) always take the
/// response's values.
pub fn merge(
    cache: &CacheSnapshot,
    requested: &FilterSet,
    page: u32,
    response: PageResponse,
    now: DateTime<Utc>,
) -> CacheSnapshot {
    let (articles, current_page) = if page == 0 {
        (response.articles, 0)
    } else {
        let mut seen: HashSet<String> = cache.articles.iter().map(|a| a.id.clone()).collect();
        let mut merged = cache.articles.clone();
        let mut appended = false;

        for article in response.articles {
            if seen.insert(article.id.clone()) {
                merged.push(article);
                appended = true;
            }
        }

        if appended {
            (merged, page)
        } else {
            debug!(
                "page {page} contributed no new articles; cursor stays at {}",
                cache.current_page
            );
            (merged, cache.current_page)
        }
    };

    CacheSnapshot {
        articles,
        total_results: response.total_results,
        next_page: response.next_page,
        last_fetched_at: Some(now),
        active_filters: requested.clone(),
        current_page,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
