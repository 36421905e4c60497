//! Prompt domain model.
//!
//! A [`Prompt`] is the immutable system/user message pair sent to the
//! chat-completion endpoint. Prompts are built fresh per request and never
//! mutated after construction.

use serde::Serialize;

/// An immutable system/user prompt pair.
///
/// The system instruction is optional: the news summarizer sends its
/// instruction inline in the user message and carries no system role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    /// Optional system instruction defining the assistant's role.
    pub system: Option<String>,
    /// User message content.
    pub user: String,
}

impl Prompt {
    /// Creates a prompt with both a system instruction and a user message.
    #[must_use]
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            user: user.into(),
        }
    }

    /// Creates a prompt carrying only a user message.
    #[must_use]
    pub fn user_only(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
        }
    }
}
