//! Error types for promptbox operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! operations: chat-completion calls, feed/article fetching, browser
//! automation, and CLI commands. Every failure surfaces as a classified
//! variant rather than a stringly-typed catch-all.

use thiserror::Error;

/// Result type alias for promptbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for promptbox operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No API credential was supplied. Checked before any network call.
    #[error("missing API credential; pass --api-key or set OPENAI_API_KEY")]
    MissingCredential,

    /// A required input field was empty. Checked before any network call.
    #[error("{field} must not be empty")]
    EmptyInput {
        /// Name of the empty field.
        field: &'static str,
    },

    /// Chat-completion endpoint errors.
    #[error("endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// Feed and article fetch errors.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Browser automation errors.
    #[error("automation error: {0}")]
    Automation(#[from] AutomationError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors from the hosted chat-completion endpoint.
#[derive(Error, Debug)]
pub enum EndpointError {
    /// Transport-level failure before a response was received.
    #[error("network failure: {0}")]
    Network(String),

    /// The service accepted the request but reported an error.
    #[error("service error: {0}")]
    Service(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response contained no choices.
    #[error("response contained no choices")]
    NoChoice,

    /// The first choice carried no text content.
    #[error("response contained no text content")]
    NoContent,
}

/// Errors from feed retrieval and article scraping.
///
/// In the news flow these are isolated per item: one failed article does
/// not abort the remaining entries.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP client construction failed.
    #[error("http client error: {0}")]
    Client(String),

    /// The feed request failed.
    #[error("feed request failed: {0}")]
    FeedRequest(String),

    /// The feed document could not be parsed.
    #[error("feed parse failed: {0}")]
    FeedParse(String),

    /// An article page request failed.
    #[error("article request failed: {url}: {reason}")]
    ArticleRequest {
        /// URL of the article.
        url: String,
        /// Reason for failure.
        reason: String,
    },

    /// The article page yielded no readable text.
    #[error("article yielded no readable text: {url}")]
    EmptyArticle {
        /// URL of the article.
        url: String,
    },

    /// A feed entry carried no link to follow.
    #[error("feed entry has no link: {title}")]
    MissingLink {
        /// Title of the entry.
        title: String,
    },

    /// Text extraction from HTML failed.
    #[error("text extraction failed: {0}")]
    Extract(String),
}

/// Errors from the WebDriver-based editor automation.
///
/// The automated page has no stable API; structural changes on it surface
/// here instead of breaking silently.
#[derive(Error, Debug)]
pub enum AutomationError {
    /// Connecting to the WebDriver endpoint failed.
    #[error("webdriver connection failed: {0}")]
    Connect(String),

    /// Navigating to the editor page failed.
    #[error("navigation failed: {url}: {reason}")]
    Navigation {
        /// Target URL.
        url: String,
        /// Reason for failure.
        reason: String,
    },

    /// An expected page element never appeared.
    #[error("element not found: {selector}: {reason}")]
    ElementNotFound {
        /// Selector that failed to match.
        selector: String,
        /// Reason for failure.
        reason: String,
    },

    /// Sending keystrokes or clicks failed.
    #[error("input failed: {0}")]
    Input(String),

    /// Closing the browser session failed.
    #[error("session error: {0}")]
    Session(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(String),
}

// Implement From traits for external errors

impl From<async_openai::error::OpenAIError> for EndpointError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;
        match err {
            OpenAIError::Reqwest(e) => Self::Network(e.to_string()),
            OpenAIError::ApiError(e) => Self::Service(e.message),
            OpenAIError::JSONDeserialize(e) => Self::MalformedResponse(e.to_string()),
            other => Self::Service(other.to_string()),
        }
    }
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        Self::Endpoint(err.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Command(CommandError::Io(err.to_string()))
    }
}

impl From<feed_rs::parser::ParseFeedError> for FetchError {
    fn from(err: feed_rs::parser::ParseFeedError) -> Self {
        Self::FeedParse(err.to_string())
    }
}
