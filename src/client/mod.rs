//! Remote client abstraction layer.
//!
//! This module defines the [`RemoteClient`] trait, the [`PageResponse`]
//! type every implementation returns, and the [`FetchError`] taxonomy.
//! The concrete HTTP implementation lives in [`http`].
//!
//! ## For contributors — adding a new backend
//!
//! 1. Create a new file in this directory (e.g. `gdelt.rs`).
//! 2. Define a struct and implement [`RemoteClient`] for it, converting
//!    the backend's native response into [`PageResponse`].
//! 3. Add the `mod` line below and re-export your struct.
//!
//! The decision, merge, and store layers are all backend-agnostic.

mod http;

pub use http::NewsdataClient;

use serde::Deserialize;
use thiserror::Error;

use crate::article::{Article, FilterSet};

/// One page of search results, as returned by a [`RemoteClient`].
///
/// Mirrors the wire shape `{status, totalResults, results, nextPage}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    /// API status string (e.g. "success").
    pub status: String,
    /// Total result count across all pages.
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
    /// Articles on this page, in the API's order.
    #[serde(rename = "results", default)]
    pub articles: Vec<Article>,
    /// Cursor for the next page; `None` when this is the last page.
    #[serde(rename = "nextPage", default)]
    pub next_page: Option<String>,
}

/// Why a fetch could not produce a page.
///
/// `Validation` is raised by the decision layer before any network call;
/// the other two come from the client.  None of them is fatal — the
/// controller records the error and keeps the previous snapshot intact.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Network or HTTP-level failure (timeout, DNS, non-2xx status).
    #[error("network request failed: {0}")]
    Transport(String),
    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The caller's request was inconsistent; rejected before any fetch.
    #[error("invalid request: {0}")]
    Validation(String),
}

/// Trait every search backend must implement.
///
/// One call fetches exactly one page.  `page_token` is `None` for the
/// first page and an opaque cursor (from a previous response's
/// `next_page`) for subsequent ones.  Retry and backoff policy belongs
/// to implementations or their callers, never to the core — a failure
/// surfaces once as [`FetchError`].
pub trait RemoteClient {
    fn fetch_page(
        &self,
        filters: &FilterSet,
        page_token: Option<&str>,
    ) -> Result<PageResponse, FetchError>;
}
