//! HTTP search backend for a newsdata.io-style API.
//!
//! This is the one module that talks to the network.  Query construction
//! and response parsing are split into pure helpers so tests can exercise
//! them without a live endpoint; the end-to-end path is covered with a
//! mock server.

use std::time::Duration;

use log::debug;

use super::{FetchError, PageResponse, RemoteClient};
use crate::article::FilterSet;

/// Production endpoint.  Tests point [`NewsdataClient::with_base_url`] at
/// a local mock server instead.
const DEFAULT_BASE_URL: &str = "https://newsdata.io";

/// Path of the paginated news search endpoint.
const NEWS_PATH: &str = "/api/1/news";

/// Per-request timeout.  There is no retry: a timeout surfaces once as
/// [`FetchError::Transport`] and the caller may re-issue the request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A blocking HTTP client for the news search API.
pub struct NewsdataClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl NewsdataClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against an arbitrary base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        }
    }

    /// Build the query string for one page request.
    ///
    /// Pure function: the api key and language are always sent; `q`,
    /// `country`, and `category` only when the filter set populates them;
    /// the page token only when paginating.
    fn query_params(&self, filters: &FilterSet, page_token: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apikey", self.api_key.clone()),
            ("language", filters.language.clone()),
        ];

        if !filters.query.is_empty() {
            params.push(("q", filters.query.clone()));
        }
        if let Some(country) = &filters.country {
            params.push(("country", country.clone()));
        }
        if let Some(category) = &filters.category {
            params.push(("category", category.clone()));
        }
        if let Some(token) = page_token {
            params.push(("page", token.to_string()));
        }

        params
    }
}

/// Parse a raw response body into a [`PageResponse`].
///
/// Pure function (no I/O) so tests can feed it fixture JSON directly.
pub fn parse_response(body: &str) -> Result<PageResponse, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

impl RemoteClient for NewsdataClient {
    fn fetch_page(
        &self,
        filters: &FilterSet,
        page_token: Option<&str>,
    ) -> Result<PageResponse, FetchError> {
        let url = format!("{}{}", self.base_url, NEWS_PATH);
        debug!("fetching {url} (token: {page_token:?})");

        let response = self
            .http
            .get(&url)
            .query(&self.query_params(filters, page_token))
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "unexpected status {status} from {url}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_response(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn page_json() -> &'static str {
        r#"{
            "status": "success",
            "totalResults": 42,
            "results": [
                {
                    "article_id": "a1",
                    "title": "First",
                    "source_id": "src",
                    "pubDate": "2025-06-01 09:00:00"
                },
                {
                    "article_id": "a2",
                    "title": "Second",
                    "source_id": "src"
                }
            ],
            "nextPage": "token-2"
        }"#
    }

    #[test]
    fn parse_response_extracts_page() {
        let page = parse_response(page_json()).unwrap();
        assert_eq!(page.status, "success");
        assert_eq!(page.total_results, 42);
        assert_eq!(page.articles.len(), 2);
        assert_eq!(page.articles[0].id, "a1");
        assert_eq!(page.next_page.as_deref(), Some("token-2"));
    }

    #[test]
    fn parse_response_defaults_missing_fields() {
        let page = parse_response(r#"{"status": "success"}"#).unwrap();
        assert_eq!(page.total_results, 0);
        assert!(page.articles.is_empty());
        assert!(page.next_page.is_none());
    }

    #[test]
    fn parse_response_null_next_page_means_last_page() {
        let page =
            parse_response(r#"{"status": "success", "totalResults": 1, "nextPage": null}"#)
                .unwrap();
        assert!(page.next_page.is_none());
    }

    #[test]
    fn parse_response_rejects_malformed_body() {
        let err = parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn query_params_omit_unset_filters() {
        let client = NewsdataClient::with_base_url("http://localhost", "key");
        let params = client.query_params(&FilterSet::default(), None);

        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["apikey", "language"]);
    }

    #[test]
    fn query_params_include_populated_filters_and_token() {
        let client = NewsdataClient::with_base_url("http://localhost", "key");
        let filters = FilterSet {
            query: "ai".into(),
            country: Some("gb".into()),
            category: Some("technology".into()),
            language: "en".into(),
        };
        let params = client.query_params(&filters, Some("tok"));

        assert!(params.contains(&("q", "ai".to_string())));
        assert!(params.contains(&("country", "gb".to_string())));
        assert!(params.contains(&("category", "technology".to_string())));
        assert!(params.contains(&("page", "tok".to_string())));
    }

    #[test]
    fn fetch_page_hits_endpoint_and_parses() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", NEWS_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apikey".into(), "test-key".into()),
                Matcher::UrlEncoded("language".into(), "en".into()),
                Matcher::UrlEncoded("q".into(), "rust".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(page_json())
            .create();

        let client = NewsdataClient::with_base_url(server.url(), "test-key");
        let page = client
            .fetch_page(&FilterSet::query("rust"), None)
            .unwrap();

        mock.assert();
        assert_eq!(page.articles.len(), 2);
        assert_eq!(page.next_page.as_deref(), Some("token-2"));
    }

    #[test]
    fn fetch_page_sends_page_token_when_paginating() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", NEWS_PATH)
            .match_query(Matcher::UrlEncoded("page".into(), "token-2".into()))
            .with_status(200)
            .with_body(r#"{"status": "success"}"#)
            .create();

        let client = NewsdataClient::with_base_url(server.url(), "test-key");
        client
            .fetch_page(&FilterSet::default(), Some("token-2"))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn non_success_status_is_a_transport_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", NEWS_PATH)
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("rate limited")
            .create();

        let client = NewsdataClient::with_base_url(server.url(), "test-key");
        let err = client.fetch_page(&FilterSet::default(), None).unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", NEWS_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json at all")
            .create();

        let client = NewsdataClient::with_base_url(server.url(), "test-key");
        let err = client.fetch_page(&FilterSet::default(), None).unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }
}
