//! # promptbox-rs
//!
//! Prompt-driven LLM demo apps behind one CLI.
//!
//! promptbox wraps a hosted chat-completion endpoint with three small
//! apps: a PyGame code generator (optionally pasting the result into an
//! online editor via WebDriver), a health/fitness planner with a
//! follow-up Q&A loop, and an RSS news summarizer with per-article
//! failure isolation.
//!
//! ## Features
//!
//! - **Typed orchestration**: one [`Prompt`] in, one [`ModelResponse`] or
//!   classified error out, through the [`ChatBackend`] seam
//! - **Prompt templates**: per-user overrides of every system prompt
//! - **Per-item isolation**: a dead article never aborts a news run
//! - **Caller-driven automation**: the editor browser session closes on
//!   an explicit signal, not a timer

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod apps;
pub mod automation;
pub mod cli;
pub mod core;
pub mod error;
pub mod fetch;
pub mod llm;
pub mod prompts;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{
    Credential, FeedEntry, GeneratedCode, ModelResponse, NewsItem, NewsReport, PlanSession,
    Prompt, UserProfile,
};

// Re-export backend types
pub use llm::{ChatBackend, DEFAULT_MODEL, OpenAiBackend};

// Re-export prompt types
pub use prompts::PromptSet;

// Re-export fetch types
pub use fetch::{
    ARTICLE_CHAR_BUDGET, ArticleFetcher, DEFAULT_ENTRY_LIMIT, HttpArticleFetcher,
};

// Re-export automation types
pub use automation::EditorSession;

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
