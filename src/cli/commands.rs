//! CLI command implementations.
//!
//! Contains the business logic for each CLI command. Credential and input
//! validation run here, before any network call is attempted.

use std::io::Write as IoWrite;
use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::apps::{codegen, health, news};
use crate::automation::EditorSession;
use crate::cli::output::{
    OutputFormat, format_generated_code, format_news_report, format_plan_session,
    format_prompt_files,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{Credential, NewsReport, UserProfile};
use crate::error::{Error, Result};
use crate::fetch::{HttpArticleFetcher, fetch_feed, http_client};
use crate::llm::OpenAiBackend;
use crate::prompts::PromptSet;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub async fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let prompts = PromptSet::load(cli.prompt_dir.as_deref());

    match &cli.command {
        Commands::Codegen {
            query,
            run,
            webdriver,
        } => cmd_codegen(cli, &prompts, query, *run, webdriver, format).await,
        Commands::Health {
            age,
            weight_kg,
            height_cm,
            sex,
            activity_level,
            dietary_preference,
            fitness_goal,
            ask,
        } => {
            let profile = UserProfile::new(
                *age,
                *weight_kg,
                *height_cm,
                sex.parse()?,
                activity_level.parse()?,
                dietary_preference.parse()?,
                fitness_goal.parse()?,
            )?;
            cmd_health(cli, &prompts, profile, ask, format).await
        }
        Commands::News {
            topic,
            limit,
            max_chars,
        } => cmd_news(cli, &prompts, topic, *limit, *max_chars, format).await,
        Commands::Prompts { dir } => cmd_prompts(dir.as_deref(), format),
    }
}

/// Validates the credential and builds the endpoint backend.
fn make_backend(cli: &Cli) -> Result<OpenAiBackend> {
    let credential = Credential::parse(cli.api_key.as_deref())?;
    Ok(OpenAiBackend::new(&credential, cli.model.clone()))
}

async fn cmd_codegen(
    cli: &Cli,
    prompts: &PromptSet,
    query: &str,
    run: bool,
    webdriver: &str,
    format: OutputFormat,
) -> Result<String> {
    let backend = make_backend(cli)?;
    let generated = codegen::generate(&backend, prompts, query).await?;

    if run {
        let session = EditorSession::connect(webdriver).await?;
        if let Err(err) = session.run_code(&generated.code).await {
            // Best effort: do not leak the browser on a failed paste.
            let _ = session.close().await;
            return Err(err.into());
        }
        let held = hold_open().await;
        session.close().await?;
        held?;
    }

    Ok(format_generated_code(&generated, format))
}

/// Keeps the browser session open until the operator presses Enter.
async fn hold_open() -> Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(
        stderr,
        "Code is running in the editor. Press Enter to close the browser session."
    )?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(())
}

async fn cmd_health(
    cli: &Cli,
    prompts: &PromptSet,
    profile: UserProfile,
    questions: &[String],
    format: OutputFormat,
) -> Result<String> {
    let backend = make_backend(cli)?;

    let mut session = health::generate_plans(&backend, prompts, profile).await?;
    for question in questions {
        health::answer_question(&backend, prompts, &mut session, question).await?;
    }

    Ok(format_plan_session(&session, format))
}

async fn cmd_news(
    cli: &Cli,
    prompts: &PromptSet,
    topic: &str,
    limit: usize,
    max_chars: usize,
    format: OutputFormat,
) -> Result<String> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Error::EmptyInput { field: "topic" });
    }
    let backend = make_backend(cli)?;

    let client = http_client()?;
    let entries = fetch_feed(&client, topic, limit).await?;
    let fetcher = HttpArticleFetcher::new(client);
    let items = news::summarize_entries(&backend, &fetcher, prompts, &entries, max_chars).await;

    let report = NewsReport {
        topic: topic.to_string(),
        items,
    };
    Ok(format_news_report(&report, format))
}

fn cmd_prompts(dir: Option<&Path>, format: OutputFormat) -> Result<String> {
    let target = dir
        .map(Path::to_path_buf)
        .or_else(PromptSet::default_dir)
        .ok_or_else(|| Error::Config {
            message: "cannot determine home directory for prompt templates".to_string(),
        })?;

    let written = PromptSet::write_defaults(&target)?;
    Ok(format_prompt_files(&written, format))
}
