//! RSS search-feed retrieval and parsing.

use tracing::debug;

use crate::core::news::{FeedEntry, UNTITLED};
use crate::error::FetchError;

/// Google News RSS search endpoint. The topic goes in the `q` parameter.
pub const FEED_SEARCH_URL: &str = "https://news.google.com/rss/search";

/// Number of feed entries consumed per run.
pub const DEFAULT_ENTRY_LIMIT: usize = 5;

/// Fetches the search feed for a topic and returns up to `limit` entries
/// in feed order.
///
/// # Errors
///
/// Returns [`FetchError::FeedRequest`] on transport or status failures and
/// [`FetchError::FeedParse`] when the body is not a parseable feed.
pub async fn fetch_feed(
    client: &reqwest::Client,
    topic: &str,
    limit: usize,
) -> Result<Vec<FeedEntry>, FetchError> {
    debug!(%topic, limit, "fetching news feed");
    let response = client
        .get(FEED_SEARCH_URL)
        .query(&[("q", topic)])
        .send()
        .await
        .map_err(|e| FetchError::FeedRequest(e.to_string()))?
        .error_for_status()
        .map_err(|e| FetchError::FeedRequest(e.to_string()))?;

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::FeedRequest(e.to_string()))?;

    parse_feed(&body, limit)
}

/// Parses a feed document into entries, preserving feed order and capping
/// at `limit`.
///
/// Entries without a title get the [`UNTITLED`] placeholder; entries
/// without links are kept so the caller can report them per item.
///
/// # Errors
///
/// Returns [`FetchError::FeedParse`] when the document is not a valid
/// feed.
pub fn parse_feed(bytes: &[u8], limit: usize) -> Result<Vec<FeedEntry>, FetchError> {
    let feed = feed_rs::parser::parse(bytes)?;

    Ok(feed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| FeedEntry {
            title: entry
                .title
                .map_or_else(|| UNTITLED.to_string(), |t| t.content),
            link: entry.links.into_iter().next().map(|l| l.href),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>search results</title>
    <item><title>First</title><link>https://example.com/1</link></item>
    <item><title>Second</title><link>https://example.com/2</link></item>
    <item><title>Third</title><link>https://example.com/3</link></item>
    <item><title>Fourth</title><link>https://example.com/4</link></item>
    <item><title>Fifth</title><link>https://example.com/5</link></item>
    <item><title>Sixth</title><link>https://example.com/6</link></item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_caps_at_limit_in_feed_order() {
        let entries = parse_feed(FIXTURE.as_bytes(), DEFAULT_ENTRY_LIMIT).ok();
        let entries = entries.unwrap_or_default();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].title, "First");
        assert_eq!(entries[4].title, "Fifth");
        assert_eq!(entries[0].link.as_deref(), Some("https://example.com/1"));
    }

    #[test]
    fn test_parse_short_feed() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title>
            <item><title>Only</title><link>https://example.com/only</link></item>
            </channel></rss>"#;
        let entries = parse_feed(xml.as_bytes(), 5).unwrap_or_default();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_parse_entry_without_title_or_link() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title>
            <item><description>no title, no link</description></item>
            </channel></rss>"#;
        let entries = parse_feed(xml.as_bytes(), 5).unwrap_or_default();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, UNTITLED);
        assert!(entries[0].link.is_none());
    }

    #[test]
    fn test_parse_rejects_non_feed() {
        let result = parse_feed(b"<html><body>not a feed</body></html>", 5);
        assert!(matches!(result, Err(FetchError::FeedParse(_))));
    }
}
