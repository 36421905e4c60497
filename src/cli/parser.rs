//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Categorical health
//! fields arrive as strings and are parsed against the closed option sets
//! in [`crate::core::profile`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// promptbox-rs: prompt-driven LLM demo apps behind one CLI.
///
/// Three apps over a hosted chat-completion endpoint: PyGame code
/// generation, health/fitness planning, and RSS news summarization.
#[derive(Parser, Debug)]
#[command(name = "promptbox-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API key for the chat-completion endpoint.
    ///
    /// Falls back to `OPENAI_API_KEY`. Held in memory for the invocation
    /// only; never persisted.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model identifier for completion calls.
    #[arg(long, default_value = crate::llm::DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Directory of prompt template overrides.
    ///
    /// Defaults to `~/.config/promptbox-rs/prompts/`.
    #[arg(long, env = "PROMPTBOX_PROMPT_DIR", global = true)]
    pub prompt_dir: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Generate PyGame visualization code from a description.
    Codegen {
        /// What to visualize.
        ///
        /// Example: "Create a particle system simulation where 100
        /// particles emit from the mouse position and respond to
        /// keyboard-controlled wind forces".
        query: String,

        /// Paste the generated code into the online editor and run it.
        ///
        /// Requires a WebDriver server; the browser stays open until
        /// Enter is pressed.
        #[arg(long)]
        run: bool,

        /// WebDriver endpoint used with --run.
        #[arg(long, default_value = crate::automation::DEFAULT_WEBDRIVER_URL)]
        webdriver: String,
    },

    /// Generate personalized dietary and fitness plans.
    Health {
        /// Age in years (10-100).
        #[arg(long)]
        age: u8,

        /// Weight in kilograms (20-300).
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters (100-250).
        #[arg(long)]
        height_cm: f64,

        /// Sex (male, female, other).
        #[arg(long, default_value = "male")]
        sex: String,

        /// Activity level (sedentary, lightly-active, moderately-active,
        /// very-active, extremely-active).
        #[arg(long, default_value = "sedentary")]
        activity_level: String,

        /// Dietary preference (vegetarian, keto, gluten-free, low-carb,
        /// dairy-free).
        #[arg(long, default_value = "vegetarian")]
        dietary_preference: String,

        /// Fitness goal (lose-weight, gain-muscle, endurance, stay-fit,
        /// strength-training).
        #[arg(long, default_value = "lose-weight")]
        fitness_goal: String,

        /// Follow-up question about the generated plans (repeatable).
        #[arg(long = "ask", value_name = "QUESTION")]
        ask: Vec<String>,
    },

    /// Fetch and summarize the latest news on a topic.
    News {
        /// Topic to search for.
        topic: String,

        /// Maximum number of feed entries to process.
        #[arg(long, default_value_t = crate::fetch::DEFAULT_ENTRY_LIMIT)]
        limit: usize,

        /// Character budget applied to article text before summarization.
        #[arg(long, default_value_t = crate::fetch::ARTICLE_CHAR_BUDGET)]
        max_chars: usize,
    },

    /// Write the default prompt templates for customization.
    Prompts {
        /// Target directory (defaults to the user prompt directory).
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
