//! Chat-completion backend seam.
//!
//! The request orchestrator talks to the hosted endpoint through the
//! [`ChatBackend`] trait: one prompt in, one text response or classified
//! error out. No retries, no backoff, no streaming. Tests substitute a
//! deterministic stub; production wires [`OpenAiBackend`].

pub mod openai;

pub use openai::OpenAiBackend;

use async_trait::async_trait;

use crate::core::{ModelResponse, Prompt};
use crate::error::EndpointError;

/// Default chat-completion model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// A synchronous-call chat-completion backend.
///
/// Implementations must be `Send + Sync`; one call is awaited to
/// completion per prompt, with no cancellation beyond process exit.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends one prompt and returns the model's text response.
    ///
    /// # Errors
    ///
    /// Returns an [`EndpointError`] classifying network, service, and
    /// malformed-response failures.
    async fn complete(&self, prompt: &Prompt) -> Result<ModelResponse, EndpointError>;
}
