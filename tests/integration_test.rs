//! Integration tests for promptbox.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use async_trait::async_trait;

use promptbox_rs::apps::{codegen, health, news};
use promptbox_rs::core::{
    ActivityLevel, DietaryPreference, FitnessGoal, ModelResponse, Prompt, Sex, UserProfile,
};
use promptbox_rs::error::{EndpointError, Error, FetchError};
use promptbox_rs::fetch::{ARTICLE_CHAR_BUDGET, ArticleFetcher, parse_feed};
use promptbox_rs::llm::ChatBackend;
use promptbox_rs::prompts::PromptSet;
use promptbox_rs::Credential;

/// Deterministic stub endpoint: replies with a digest of the prompt it
/// received and records every call.
struct StubEndpoint {
    calls: Mutex<Vec<Prompt>>,
}

impl StubEndpoint {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

#[async_trait]
impl ChatBackend for StubEndpoint {
    async fn complete(&self, prompt: &Prompt) -> Result<ModelResponse, EndpointError> {
        self.calls.lock().expect("lock poisoned").push(prompt.clone());
        Ok(ModelResponse::new(format!(
            "[{}] {}",
            prompt.system.as_deref().unwrap_or("-"),
            prompt.user
        )))
    }
}

/// Stub article fetcher: serves canned text, failing for URLs that end
/// in `/3`.
struct StubArticles;

#[async_trait]
impl ArticleFetcher for StubArticles {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if url.ends_with("/3") {
            return Err(FetchError::ArticleRequest {
                url: url.to_string(),
                reason: "connection reset".to_string(),
            });
        }
        Ok(format!("article text from {url}"))
    }
}

fn profile() -> UserProfile {
    UserProfile::new(
        30,
        70.0,
        175.0,
        Sex::Female,
        ActivityLevel::ModeratelyActive,
        DietaryPreference::GlutenFree,
        FitnessGoal::Endurance,
    )
    .expect("valid profile")
}

const FEED_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>electric vehicles - search</title>
    <item><title>EV sales surge</title><link>https://example.com/1</link></item>
    <item><title>New battery plant</title><link>https://example.com/2</link></item>
    <item><title>Recall announced</title><link>https://example.com/3</link></item>
    <item><title>Charging network grows</title><link>https://example.com/4</link></item>
    <item><title>Fleet electrification</title><link>https://example.com/5</link></item>
  </channel>
</rss>"#;

#[test]
fn test_credential_gate_runs_before_any_backend_exists() {
    assert!(matches!(
        Credential::parse(None),
        Err(Error::MissingCredential)
    ));
    assert!(matches!(
        Credential::parse(Some("  ")),
        Err(Error::MissingCredential)
    ));
}

#[tokio::test]
async fn test_codegen_is_idempotent_against_deterministic_endpoint() {
    let endpoint = StubEndpoint::new();
    let prompts = PromptSet::defaults();

    let first = codegen::generate(&endpoint, &prompts, "orbiting planets")
        .await
        .expect("first generation");
    let second = codegen::generate(&endpoint, &prompts, "orbiting planets")
        .await
        .expect("second generation");

    // No hidden state mutation between identical calls.
    assert_eq!(first, second);
    assert_eq!(endpoint.call_count(), 2);
}

#[tokio::test]
async fn test_codegen_response_is_shown_verbatim() {
    let endpoint = StubEndpoint::new();
    let prompts = PromptSet::defaults();

    let generated = codegen::generate(&endpoint, &prompts, "orbiting planets")
        .await
        .expect("generation");
    assert!(generated.code.ends_with("User query: orbiting planets"));
}

#[tokio::test]
async fn test_news_flow_isolates_failed_entry() {
    let entries = parse_feed(FEED_FIXTURE.as_bytes(), 5).expect("fixture parses");
    assert_eq!(entries.len(), 5);

    let endpoint = StubEndpoint::new();
    let prompts = PromptSet::defaults();
    let items = news::summarize_entries(
        &endpoint,
        &StubArticles,
        &prompts,
        &entries,
        ARTICLE_CHAR_BUDGET,
    )
    .await;

    assert_eq!(items.len(), 5);

    // Entry 3 failed to scrape; the other four still produced summaries.
    let summarized: Vec<_> = items.iter().filter(|i| i.summary.is_some()).collect();
    assert_eq!(summarized.len(), 4);

    assert_eq!(items[2].title, "Recall announced");
    assert!(items[2].summary.is_none());
    let message = items[2].error.as_deref().expect("error message");
    assert!(message.contains("connection reset"));

    // Feed order is preserved in the report.
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "EV sales surge",
            "New battery plant",
            "Recall announced",
            "Charging network grows",
            "Fleet electrification",
        ]
    );

    // Only the four reachable articles were summarized.
    assert_eq!(endpoint.call_count(), 4);
}

#[tokio::test]
async fn test_health_flow_plans_then_questions() {
    let endpoint = StubEndpoint::new();
    let prompts = PromptSet::defaults();

    let mut session = health::generate_plans(&endpoint, &prompts, profile())
        .await
        .expect("plans generated");
    assert_eq!(endpoint.call_count(), 2);

    health::answer_question(&endpoint, &prompts, &mut session, "How much water?")
        .await
        .expect("first question");
    health::answer_question(&endpoint, &prompts, &mut session, "Rest days?")
        .await
        .expect("second question");

    assert_eq!(endpoint.call_count(), 4);
    assert_eq!(session.qa().len(), 2);
    assert_eq!(session.qa()[0].question, "How much water?");

    // Each answer was generated with both plans as context.
    let answer = &session.qa()[1].answer;
    assert!(answer.contains("Dietary Plan:"));
    assert!(answer.contains("Fitness Plan:"));
    assert!(answer.contains("User Question: Rest days?"));
}

#[tokio::test]
async fn test_failing_endpoint_yields_typed_error_not_panic() {
    struct DownEndpoint;

    #[async_trait]
    impl ChatBackend for DownEndpoint {
        async fn complete(&self, _prompt: &Prompt) -> Result<ModelResponse, EndpointError> {
            Err(EndpointError::Network("dns failure".to_string()))
        }
    }

    let prompts = PromptSet::defaults();
    let result = codegen::generate(&DownEndpoint, &prompts, "anything").await;
    match result {
        Err(Error::Endpoint(EndpointError::Network(reason))) => {
            assert_eq!(reason, "dns failure");
        }
        other => assert!(other.is_err(), "expected endpoint error"),
    }
}
