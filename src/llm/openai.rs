//! OpenAI chat-completion backend.

use async_openai::config::OpenAIConfig;
use async_openai::types::{ChatCompletionRequestMessage, CreateChatCompletionRequest};
use async_openai::Client;
use async_trait::async_trait;
use tracing::debug;

use super::ChatBackend;
use crate::core::{Credential, ModelResponse, Prompt};
use crate::error::EndpointError;

/// Backend over the OpenAI chat-completion API.
#[derive(Debug)]
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiBackend {
    /// Creates a backend with the given credential and model identifier.
    ///
    /// The credential is held by the underlying client for the lifetime of
    /// the invocation and never written to disk.
    #[must_use]
    pub fn new(credential: &Credential, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(credential.expose());
        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    /// Returns the configured model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatBackend for OpenAiBackend {
    async fn complete(&self, prompt: &Prompt) -> Result<ModelResponse, EndpointError> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(2);
        if let Some(system) = &prompt.system {
            messages.push(ChatCompletionRequestMessage::System(system.clone().into()));
        }
        messages.push(ChatCompletionRequestMessage::User(prompt.user.clone().into()));

        let request = CreateChatCompletionRequest {
            messages,
            model: self.model.clone(),
            ..Default::default()
        };

        debug!(model = %self.model, "sending chat completion request");
        let response = self.client.chat().create(request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(EndpointError::NoChoice)?;
        let text = choice.message.content.ok_or(EndpointError::NoContent)?;

        debug!(chars = text.len(), "chat completion returned");
        Ok(ModelResponse::new(text))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::Error;

    fn credential() -> Credential {
        Credential::parse(Some("sk-test")).unwrap()
    }

    #[test]
    fn test_backend_keeps_model_id() {
        let backend = OpenAiBackend::new(&credential(), "gpt-4o");
        assert_eq!(backend.model(), "gpt-4o");
    }

    #[test]
    fn test_backend_requires_credential_first() {
        // The credential gate runs before a backend can exist at all.
        assert!(matches!(
            Credential::parse(Some("")),
            Err(Error::MissingCredential)
        ));
    }
}
