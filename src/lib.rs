//! newsfeed-cache — a client-side controller for a paginated news search API.
//!
//! Sits between a UI layer and the remote API and answers one question
//! per request: serve the data already held, or fetch?  Fetched pages are
//! merged into a single deduplicated, ordered article collection.
//!
//! ## Architecture overview
//!
//! ```text
//!              requestFeed(filters, page)
//!                        │
//!                        ▼
//! ┌────────────┐   ┌───────────┐  Fetch   ┌──────────────┐
//! │ controller │──►│ decision  │ ───────► │ RemoteClient │
//! │            │   │ (pure)    │          │ (trait)      │
//! │            │   └───────────┘          └──────┬───────┘
//! │            │        │ ServeCache            │ PageResponse
//! │            │        ▼                        ▼
//! │            │   ┌───────────┐  reads    ┌───────────┐
//! │            │──►│   store   │◄──────────│   merge   │
//! └────────────┘   │ (snapshot)│  applies  │  (pure)   │
//!                  └───────────┘           └───────────┘
//! ```
//!
//! * **`article`** — the `Article` and `FilterSet` data types.
//! * **`client`** — the `RemoteClient` trait, `PageResponse`, the
//!   `FetchError` taxonomy, and the concrete HTTP implementation.
//! * **`decision`** — pure cache-or-fetch logic with the 15 minute TTL.
//! * **`merge`** — pure page-into-snapshot folding with id dedup.
//! * **`snapshot`** — the materialized feed state.
//! * **`store`** — single owner of the live snapshot and request flags.
//! * **`controller`** — the public surface wiring it all together.
//!
//! ## Quick start
//!
//! ```no_run
//! use newsfeed_cache::{FeedController, FilterSet, NewsdataClient};
//!
//! let client = NewsdataClient::new("your-api-key");
//! let mut feed = FeedController::new(client);
//!
//! let snapshot = feed.request_feed(&FilterSet::query("rust"), 0)?;
//! for article in &snapshot.articles {
//!     println!("{}", article.title);
//! }
//! # Ok::<(), newsfeed_cache::FetchError>(())
//! ```

pub mod article;
pub mod client;
pub mod controller;
pub mod decision;
pub mod merge;
pub mod snapshot;
pub mod store;

// Re-export the main types so callers can write
// `use newsfeed_cache::{FeedController, FilterSet, ...};`
pub use article::{Article, FilterSet};
pub use client::{FetchError, NewsdataClient, PageResponse, RemoteClient};
pub use controller::FeedController;
pub use decision::{decide, Decision, CACHE_TTL_MINUTES};
pub use merge::merge;
pub use snapshot::CacheSnapshot;
pub use store::CacheStore;
