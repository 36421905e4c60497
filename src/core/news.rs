//! News domain models.

use serde::Serialize;

/// One item from a parsed syndication feed: a title and, usually, a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    /// Entry title, or a placeholder when the feed omits one.
    pub title: String,
    /// Link to the full article, when present.
    pub link: Option<String>,
}

/// Fallback title for entries without one.
pub const UNTITLED: &str = "(untitled)";

/// Outcome for one feed entry: either a summary or a per-item error.
///
/// Exactly one of `summary` and `error` is set. A failed item never aborts
/// its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Entry title.
    pub title: String,
    /// Link to the full article, when the feed provided one.
    pub link: Option<String>,
    /// Generated summary, on success.
    pub summary: Option<String>,
    /// Display-ready error message, on failure.
    pub error: Option<String>,
}

impl NewsItem {
    /// Builds a successful item.
    #[must_use]
    pub fn summarized(entry: &FeedEntry, summary: impl Into<String>) -> Self {
        Self {
            title: entry.title.clone(),
            link: entry.link.clone(),
            summary: Some(summary.into()),
            error: None,
        }
    }

    /// Builds a failed item carrying its error message.
    #[must_use]
    pub fn failed(entry: &FeedEntry, error: impl Into<String>) -> Self {
        Self {
            title: entry.title.clone(),
            link: entry.link.clone(),
            summary: None,
            error: Some(error.into()),
        }
    }
}

/// The full result of one news run, in feed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsReport {
    /// The topic that was searched.
    pub topic: String,
    /// Per-entry outcomes, in feed order.
    pub items: Vec<NewsItem>,
}

impl NewsReport {
    /// Returns `true` when the feed produced no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarized_item() {
        let entry = FeedEntry {
            title: "EV sales rise".to_string(),
            link: Some("https://example.com/ev".to_string()),
        };
        let item = NewsItem::summarized(&entry, "Sales rose.");
        assert_eq!(item.summary.as_deref(), Some("Sales rose."));
        assert!(item.error.is_none());
    }

    #[test]
    fn test_failed_item() {
        let entry = FeedEntry {
            title: "Broken".to_string(),
            link: None,
        };
        let item = NewsItem::failed(&entry, "feed entry has no link: Broken");
        assert!(item.summary.is_none());
        assert_eq!(item.error.as_deref(), Some("feed entry has no link: Broken"));
    }
}
