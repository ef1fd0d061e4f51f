//! Cache-or-fetch decision logic.
//!
//! Given the requested filters and page, the current snapshot, and the
//! current time, [`decide`] answers exactly one question: can this
//! request be served from the cache, or does it need the network?  It is
//! a pure function — no I/O, no clock access — so every branch is
//! directly testable.

use chrono::{DateTime, Duration, Utc};

use crate::article::FilterSet;
use crate::client::FetchError;
use crate::snapshot::CacheSnapshot;

/// How long the filter-less default feed stays fresh.
///
/// Only the empty filter set auto-refreshes on expiry; an active search
/// is served from cache until the caller changes something, no matter
/// how stale it gets.
pub const CACHE_TTL_MINUTES: i64 = 15;

/// The outcome of [`decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The cached snapshot satisfies the request; return it unchanged.
    ServeCache,
    /// Issue a remote fetch.  `page_token` is `None` for a fresh page-0
    /// request and the snapshot's cursor when paginating.
    Fetch { page_token: Option<String> },
}

/// Decide whether a request needs the network.
///
/// Rules, evaluated in order:
///
/// 1. `page > 0` — pagination always fetches, using the snapshot's
///    `next_page` cursor.  Paginating when no cursor exists is a caller
///    inconsistency and is rejected with [`FetchError::Validation`]
///    before any network call.
/// 2. Requested filters differ from the snapshot's — fetch.
/// 3. The snapshot has never been fetched (or was cleared) — fetch.
/// 4. The snapshot is older than the TTL **and** the request is the
///    empty filter set — fetch.
/// 5. Otherwise serve the cache.
///
/// Note the asymmetry in rule 4: an active, non-empty search whose TTL
/// has expired is still served from cache.  Repeating the same search
/// never re-fetches until the caller changes filters or clears the feed.
pub fn decide(
    requested: &FilterSet,
    page: u32,
    cache: &CacheSnapshot,
    now: DateTime<Utc>,
) -> Result<Decision, FetchError> {
    if page > 0 {
        let page_token = cache.next_page.clone().ok_or_else(|| {
            FetchError::Validation(format!(
                "page {page} requested but the cache holds no next-page cursor"
            ))
        })?;
        return Ok(Decision::Fetch {
            page_token: Some(page_token),
        });
    }

    if *requested != cache.active_filters {
        return Ok(Decision::Fetch { page_token: None });
    }

    let last_fetched_at = match cache.last_fetched_at {
        Some(ts) => ts,
        None => return Ok(Decision::Fetch { page_token: None }),
    };

    let expired = now - last_fetched_at > Duration::minutes(CACHE_TTL_MINUTES);
    if expired && requested.is_empty() {
        return Ok(Decision::Fetch { page_token: None });
    }

    Ok(Decision::ServeCache)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
