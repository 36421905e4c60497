//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. Model text is passed through
//! verbatim; formatting only adds framing around it.

use std::fmt::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::{GeneratedCode, NewsReport, PlanSession};
use crate::error::Error;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats generated code.
///
/// Text output is the code itself, exactly as returned by the model.
#[must_use]
pub fn format_generated_code(generated: &GeneratedCode, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = generated.code.clone();
            if !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => format_json(generated),
    }
}

/// Formats a plan session: both plans plus any Q&A exchanges.
#[must_use]
pub fn format_plan_session(session: &PlanSession, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_plan_session_text(session),
        OutputFormat::Json => format_json(session),
    }
}

fn format_plan_session_text(session: &PlanSession) -> String {
    let mut output = String::new();

    output.push_str("Your Personalized Dietary Plan\n");
    output.push_str("==============================\n\n");
    let _ = writeln!(output, "Why this plan works:\n{}\n", session.dietary.why_this_plan_works);
    let _ = writeln!(output, "Meal Plan:\n{}\n", session.dietary.meal_plan);
    let _ = writeln!(
        output,
        "Important Considerations:\n{}\n",
        session.dietary.important_considerations
    );

    output.push_str("Your Personalized Fitness Plan\n");
    output.push_str("==============================\n\n");
    let _ = writeln!(output, "Goals:\n{}\n", session.fitness.goals);
    let _ = writeln!(output, "Exercise Routine:\n{}\n", session.fitness.routine);
    let _ = writeln!(output, "Pro Tips:\n{}", session.fitness.tips);

    if !session.qa().is_empty() {
        output.push('\n');
        output.push_str("Questions & Answers\n");
        output.push_str("===================\n");
        for exchange in session.qa() {
            let _ = writeln!(output, "\nQ: {}", exchange.question);
            let _ = writeln!(output, "A: {}", exchange.answer);
        }
    }

    output
}

/// Formats a news report.
#[must_use]
pub fn format_news_report(report: &NewsReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_news_report_text(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_news_report_text(report: &NewsReport) -> String {
    if report.is_empty() {
        return "No news articles found. Try another topic.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "News: {}", report.topic);
    output.push_str(&"=".repeat(6 + report.topic.len()));
    output.push('\n');

    for item in &report.items {
        let _ = writeln!(output, "\n{}", item.title);
        if let Some(link) = &item.link {
            let _ = writeln!(output, "  {link}");
        }
        match (&item.summary, &item.error) {
            (Some(summary), _) => {
                let _ = writeln!(output, "  Summary: {summary}");
            }
            (None, Some(error)) => {
                let _ = writeln!(output, "  {error}");
            }
            (None, None) => {}
        }
    }

    output
}

/// Formats the result of prompt-template scaffolding.
#[must_use]
pub fn format_prompt_files(written: &[PathBuf], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if written.is_empty() {
                return "All prompt templates already exist.\n".to_string();
            }
            let mut output = String::new();
            let _ = writeln!(output, "Wrote {} prompt templates:", written.len());
            for path in written {
                let _ = writeln!(output, "  {}", path.display());
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PromptFiles<'a> {
                written: &'a [PathBuf],
            }
            format_json(&PromptFiles { written })
        }
    }
}

/// Formats an error for the CLI boundary.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
