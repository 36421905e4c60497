//! Feed retrieval and article scraping.
//!
//! Provides the RSS search-feed fetch, HTML-to-text extraction for article
//! pages, and the grapheme-safe character budget applied before
//! summarization. The [`ArticleFetcher`] trait is the seam the news flow
//! is tested through.

pub mod article;
pub mod feed;

pub use article::{
    ARTICLE_CHAR_BUDGET, ArticleFetcher, HttpArticleFetcher, extract_text, truncate_graphemes,
};
pub use feed::{DEFAULT_ENTRY_LIMIT, FEED_SEARCH_URL, fetch_feed, parse_feed};

use std::time::Duration;

use crate::error::FetchError;

/// User agent sent with feed and article requests.
pub const USER_AGENT: &str = concat!("promptbox-rs/", env!("CARGO_PKG_VERSION"));

/// Request timeout for feed and article fetches.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the shared HTTP client for feed and article requests.
///
/// # Errors
///
/// Returns [`FetchError::Client`] if the TLS backend fails to initialize.
pub fn http_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}
