//! Article scraping and text budgeting.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::FetchError;

/// Character budget applied to article text before summarization.
///
/// Measured in grapheme clusters so a multi-codepoint character is never
/// split at the cut.
pub const ARTICLE_CHAR_BUDGET: usize = 2000;

/// Fetches an article page and returns its readable text.
///
/// Implementations must be `Send + Sync`. The news flow holds one fetcher
/// per run; tests substitute a stub that never touches the network.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Fetches the page at `url` and extracts its plain text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure or when the page
    /// yields no readable text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`ArticleFetcher`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpArticleFetcher {
    client: reqwest::Client,
}

impl HttpArticleFetcher {
    /// Wraps a shared HTTP client.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "fetching article");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::ArticleRequest {
                url: url.to_string(),
                reason: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| FetchError::ArticleRequest {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::ArticleRequest {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let text = extract_text(&html)?;
        if text.is_empty() {
            return Err(FetchError::EmptyArticle {
                url: url.to_string(),
            });
        }
        Ok(text)
    }
}

/// Extracts readable text from an HTML document.
///
/// Collects paragraph elements, normalizes internal whitespace, and joins
/// them with newlines. Markup-only pages produce an empty string.
///
/// # Errors
///
/// Returns [`FetchError::Extract`] if the paragraph selector fails to
/// compile.
pub fn extract_text(html: &str) -> Result<String, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").map_err(|e| FetchError::Extract(e.to_string()))?;

    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Truncates text to at most `max` grapheme clusters.
///
/// The result is always a prefix of the input and never splits a grapheme
/// cluster. Text within the budget is returned whole.
#[must_use]
pub fn truncate_graphemes(text: &str, max: usize) -> &str {
    match text.grapheme_indices(true).nth(max) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_extract_text_joins_paragraphs() {
        let html = "<html><body>\
            <p>First   paragraph\nwith   noise.</p>\
            <script>ignored();</script>\
            <p>Second paragraph.</p>\
            <p>   </p>\
            </body></html>";
        let text = extract_text(html).unwrap_or_default();
        assert_eq!(text, "First paragraph with noise.\nSecond paragraph.");
    }

    #[test]
    fn test_extract_text_empty_document() {
        let text = extract_text("<html><body><div>no paragraphs</div></body></html>");
        assert_eq!(text.ok(), Some(String::new()));
    }

    #[test_case("hello world", 5, "hello"; "cuts ascii")]
    #[test_case("hello", 10, "hello"; "within budget")]
    #[test_case("", 10, ""; "empty input")]
    #[test_case("héllo", 2, "hé"; "multibyte boundary")]
    fn test_truncate_graphemes(input: &str, max: usize, expected: &str) {
        assert_eq!(truncate_graphemes(input, max), expected);
    }

    #[test]
    fn test_truncate_does_not_split_grapheme() {
        // Family emoji is one grapheme built from several codepoints.
        let text = "ab\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}cd";
        assert_eq!(truncate_graphemes(text, 2), "ab");
        assert_eq!(
            truncate_graphemes(text, 3),
            "ab\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}"
        );
    }

    proptest! {
        #[test]
        fn prop_truncate_is_bounded_prefix(text in ".*", max in 0usize..64) {
            let truncated = truncate_graphemes(&text, max);
            prop_assert!(text.starts_with(truncated));
            prop_assert!(truncated.graphemes(true).count() <= max);
            if text.graphemes(true).count() <= max {
                prop_assert_eq!(truncated, text.as_str());
            }
        }
    }
}
