//! News fetch-and-summarize flow.
//!
//! One summarization call per feed entry over scraped, budget-truncated
//! article text. Failures are isolated per item: a dead link or failed
//! summarization becomes that item's error string and the remaining
//! entries still run.

use tracing::{info, warn};

use crate::core::{FeedEntry, NewsItem};
use crate::error::{FetchError, Result};
use crate::fetch::{ArticleFetcher, truncate_graphemes};
use crate::llm::ChatBackend;
use crate::prompts::{PromptSet, build_summarize_prompt};

/// Display string for items whose processing failed.
///
/// The classified error is logged; the report carries this stable message
/// plus the cause.
fn item_error(err: &crate::error::Error) -> String {
    format!("Error processing article: {err}")
}

/// Summarizes each entry in feed order, isolating per-item failures.
pub async fn summarize_entries(
    backend: &dyn ChatBackend,
    fetcher: &dyn ArticleFetcher,
    prompts: &PromptSet,
    entries: &[FeedEntry],
    budget: usize,
) -> Vec<NewsItem> {
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let item = match summarize_entry(backend, fetcher, prompts, entry, budget).await {
            Ok(summary) => NewsItem::summarized(entry, summary),
            Err(err) => {
                warn!(title = %entry.title, error = %err, "entry failed");
                NewsItem::failed(entry, item_error(&err))
            }
        };
        items.push(item);
    }
    info!(
        total = items.len(),
        failed = items.iter().filter(|i| i.error.is_some()).count(),
        "news run complete"
    );
    items
}

/// Scrapes one entry's article, truncates it to the budget, and asks the
/// model for a summary.
///
/// # Errors
///
/// Returns a fetch error for a missing link, unreachable page, or empty
/// article, and an endpoint error for a failed summarization call.
pub async fn summarize_entry(
    backend: &dyn ChatBackend,
    fetcher: &dyn ArticleFetcher,
    prompts: &PromptSet,
    entry: &FeedEntry,
    budget: usize,
) -> Result<String> {
    let link = entry.link.as_deref().ok_or_else(|| FetchError::MissingLink {
        title: entry.title.clone(),
    })?;

    let text = fetcher.fetch_text(link).await?;
    let content = truncate_graphemes(&text, budget);

    let prompt = build_summarize_prompt(prompts, content);
    Ok(backend.complete(&prompt).await?.into_text())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use async_trait::async_trait;

    use crate::core::{ModelResponse, Prompt};
    use crate::error::EndpointError;
    use crate::fetch::ARTICLE_CHAR_BUDGET;

    struct StubBackend;

    #[async_trait]
    impl ChatBackend for StubBackend {
        async fn complete(
            &self,
            prompt: &Prompt,
        ) -> std::result::Result<ModelResponse, EndpointError> {
            Ok(ModelResponse::new(format!("summary of [{}]", prompt.user)))
        }
    }

    /// Serves canned article text; URLs containing "fail" error out.
    struct StubFetcher;

    #[async_trait]
    impl ArticleFetcher for StubFetcher {
        async fn fetch_text(&self, url: &str) -> std::result::Result<String, FetchError> {
            if url.contains("fail") {
                return Err(FetchError::ArticleRequest {
                    url: url.to_string(),
                    reason: "503".to_string(),
                });
            }
            Ok(format!("article text from {url}"))
        }
    }

    fn entry(title: &str, link: Option<&str>) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            link: link.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_entry_three_failing_does_not_abort_siblings() {
        let entries = vec![
            entry("one", Some("https://example.com/1")),
            entry("two", Some("https://example.com/2")),
            entry("three", Some("https://example.com/fail")),
            entry("four", Some("https://example.com/4")),
            entry("five", Some("https://example.com/5")),
        ];
        let prompts = PromptSet::defaults();
        let items =
            summarize_entries(&StubBackend, &StubFetcher, &prompts, &entries, ARTICLE_CHAR_BUDGET)
                .await;

        assert_eq!(items.len(), 5);
        assert_eq!(items.iter().filter(|i| i.summary.is_some()).count(), 4);

        let failed = &items[2];
        assert_eq!(failed.title, "three");
        assert!(failed.summary.is_none());
        let message = failed.error.as_deref().unwrap_or_default();
        assert!(message.starts_with("Error processing article:"));
        assert!(message.contains("503"));
    }

    #[tokio::test]
    async fn test_items_keep_feed_order() {
        let entries = vec![
            entry("b", Some("https://example.com/b")),
            entry("a", Some("https://example.com/a")),
        ];
        let prompts = PromptSet::defaults();
        let items =
            summarize_entries(&StubBackend, &StubFetcher, &prompts, &entries, ARTICLE_CHAR_BUDGET)
                .await;
        assert_eq!(items[0].title, "b");
        assert_eq!(items[1].title, "a");
    }

    #[tokio::test]
    async fn test_missing_link_is_per_item_error() {
        let entries = vec![entry("no link", None)];
        let prompts = PromptSet::defaults();
        let items =
            summarize_entries(&StubBackend, &StubFetcher, &prompts, &entries, ARTICLE_CHAR_BUDGET)
                .await;
        assert!(items[0].error.as_deref().unwrap_or_default().contains("no link"));
    }

    #[tokio::test]
    async fn test_summary_prompt_uses_truncated_text() {
        let e = entry("long", Some("https://example.com/long"));
        let prompts = PromptSet::defaults();
        // Budget of 7 graphemes cuts "article text from ..." to "article".
        let summary = summarize_entry(&StubBackend, &StubFetcher, &prompts, &e, 7)
            .await
            .unwrap();
        assert_eq!(summary, "summary of [Summarize this news article: article]");
    }
}
