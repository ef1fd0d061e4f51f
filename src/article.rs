//! The core data types shared across the crate.
//!
//! `Article` is a single news item as delivered by the search API, and
//! `FilterSet` is the set of search parameters a caller asks for.  Every
//! other module (decision, merge, store, client) works in terms of these
//! two types so none of them needs to know about the wire format beyond
//! the serde attributes here.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// A single news article, deserialized from the search API's JSON.
///
/// Articles are immutable once received: the controller only ever moves
/// them around, never edits them.
///
/// ## De-duplication
///
/// `id` (the wire's `article_id`) is the dedup key.  A merged snapshot
/// never contains two articles with the same `id`; the first-seen copy
/// wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    /// Unique identifier used for de-duplication across pages.
    #[serde(rename = "article_id")]
    pub id: String,

    /// Human-readable headline.
    pub title: String,

    /// URL to the full story.
    #[serde(default)]
    pub link: Option<String>,

    /// Short summary text.
    #[serde(default)]
    pub description: Option<String>,

    /// Full body text, when the API provides it.
    #[serde(default)]
    pub content: Option<String>,

    /// Keywords attached by the API.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Author names.
    #[serde(default)]
    pub creator: Vec<String>,

    /// Publication timestamp.
    ///
    /// The API sends `pubDate` as `"YYYY-MM-DD HH:MM:SS"` in UTC.  A
    /// missing or malformed date degrades to `None` rather than failing
    /// the whole response.
    #[serde(rename = "pubDate", default, deserialize_with = "pub_date")]
    pub published: Option<DateTime<Utc>>,

    /// URL of the article's lead image, if any.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Identifier of the publishing outlet (e.g. "bbc").
    pub source_id: String,

    /// Country tags.
    #[serde(default)]
    pub country: Vec<String>,

    /// Category tags (e.g. "technology", "sports").
    #[serde(default)]
    pub category: Vec<String>,

    /// Language code of the article body.
    #[serde(default)]
    pub language: Option<String>,
}

/// Parse the API's `"YYYY-MM-DD HH:MM:SS"` date format, degrading to
/// `None` on failure so one bad date can't sink a whole page.
fn pub_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }))
}

// ---------------------------------------------------------------------------
// FilterSet
// ---------------------------------------------------------------------------

/// The search parameters for one feed request.
///
/// Structurally comparable: the decision logic fetches whenever the
/// requested filters differ from the ones the cached snapshot was built
/// with, so `PartialEq` here *is* the cache-key comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    /// Free-text search query.  Empty string means "no query".
    pub query: String,
    /// Two-letter country code (e.g. "gb"), or `None` for all countries.
    pub country: Option<String>,
    /// Category code (e.g. "technology"), or `None` for all categories.
    pub category: Option<String>,
    /// Language code for results.  Always present; defaults to "en".
    pub language: String,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            query: String::new(),
            country: None,
            category: None,
            language: "en".to_string(),
        }
    }
}

impl FilterSet {
    /// Convenience constructor for a plain text search.
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            query: q.into(),
            ..Self::default()
        }
    }

    /// Whether this is the filter-less default feed.
    ///
    /// Language is deliberately ignored here: a request for the default
    /// feed in another language is still "the default feed" for TTL
    /// purposes.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.country.is_none() && self.category.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserialize_full_article() {
        let json = r#"{
            "article_id": "abc123",
            "title": "Rust 2.0 announced",
            "link": "https://example.com/rust",
            "description": "Big news",
            "content": "Full body text here",
            "keywords": ["rust", "release"],
            "creator": ["Jane Doe"],
            "pubDate": "2025-03-01 08:30:00",
            "image_url": "https://example.com/img.jpg",
            "source_id": "example",
            "country": ["gb"],
            "category": ["technology"],
            "language": "en"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "abc123");
        assert_eq!(article.title, "Rust 2.0 announced");
        assert_eq!(article.source_id, "example");
        assert_eq!(article.country, vec!["gb"]);
        assert_eq!(
            article.published,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn deserialize_minimal_article() {
        let json = r#"{
            "article_id": "min",
            "title": "Bare minimum",
            "source_id": "s"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "min");
        assert!(article.link.is_none());
        assert!(article.published.is_none());
        assert!(article.keywords.is_empty());
    }

    #[test]
    fn malformed_pub_date_degrades_to_none() {
        let json = r#"{
            "article_id": "bad-date",
            "title": "t",
            "source_id": "s",
            "pubDate": "yesterday-ish"
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.published.is_none());
    }

    #[test]
    fn null_pub_date_is_accepted() {
        let json = r#"{
            "article_id": "null-date",
            "title": "t",
            "source_id": "s",
            "pubDate": null
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.published.is_none());
    }

    // -- FilterSet -----------------------------------------------------------

    #[test]
    fn default_filter_set_is_empty_english() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert_eq!(filters.language, "en");
    }

    #[test]
    fn query_filter_set_is_not_empty() {
        assert!(!FilterSet::query("ai").is_empty());
    }

    #[test]
    fn country_or_category_makes_filter_set_non_empty() {
        let with_country = FilterSet {
            country: Some("us".into()),
            ..FilterSet::default()
        };
        let with_category = FilterSet {
            category: Some("sports".into()),
            ..FilterSet::default()
        };
        assert!(!with_country.is_empty());
        assert!(!with_category.is_empty());
    }

    #[test]
    fn language_alone_keeps_filter_set_empty() {
        let filters = FilterSet {
            language: "de".into(),
            ..FilterSet::default()
        };
        assert!(filters.is_empty());
    }

    #[test]
    fn structural_equality_compares_all_fields() {
        let a = FilterSet::query("ai");
        let b = FilterSet::query("ai");
        let c = FilterSet {
            country: Some("gb".into()),
            ..FilterSet::query("ai")
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
