//! Model response domain model.

use serde::Serialize;

/// Text returned by the chat-completion endpoint for one prompt.
///
/// Created on call return and held only for the current command invocation;
/// nothing is persisted. Failures are typed errors, not a field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelResponse {
    /// The model's text content, passed through verbatim.
    pub text: String,
}

impl ModelResponse {
    /// Wraps response text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consumes the response, returning the text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
