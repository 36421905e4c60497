//! System prompts and template builders for the three apps.
//!
//! Prompts are the fixed instruction strings each app sends alongside user
//! input. Template builders format the user messages. Each prompt can be
//! overridden by a per-user template file; compiled-in defaults apply
//! otherwise.

use std::path::Path;

use crate::core::Prompt;

/// System prompt for the PyGame code generator.
pub const CODEGEN_SYSTEM_PROMPT: &str = "You are a PyGame and Python expert who generates high-quality Python code for PyGame-based visualizations. Your responses must contain only Python code without explanations or markdown backticks.";

/// System prompt for the dietary plan call.
pub const DIETARY_SYSTEM_PROMPT: &str =
    "You are a nutrition expert. Provide a detailed dietary plan for the user based on their profile.";

/// System prompt for the fitness plan call.
pub const FITNESS_SYSTEM_PROMPT: &str =
    "You are a fitness coach. Provide a personalized workout routine based on the user's profile.";

/// System prompt for plan follow-up questions.
pub const QA_SYSTEM_PROMPT: &str = "You are a fitness and diet expert. Answer user questions.";

/// Instruction prefixed to scraped article text for summarization.
///
/// Sent inline in the user message; the summarizer carries no system role.
pub const SUMMARIZE_INSTRUCTION: &str = "Summarize this news article:";

/// Default prompt directory under user config.
const DEFAULT_PROMPT_DIR: &str = ".config/promptbox-rs/prompts";

/// Filenames for each prompt template.
const CODEGEN_FILENAME: &str = "codegen.md";
/// Filename for the dietary prompt template.
const DIETARY_FILENAME: &str = "dietary.md";
/// Filename for the fitness prompt template.
const FITNESS_FILENAME: &str = "fitness.md";
/// Filename for the Q&A prompt template.
const QA_FILENAME: &str = "qa.md";
/// Filename for the summarize instruction template.
const SUMMARIZE_FILENAME: &str = "summarize.md";

/// A set of system prompts for all apps.
///
/// Loaded from external template files when available, falling back to
/// compiled-in defaults. Use [`PromptSet::load`] to resolve the prompt
/// directory from CLI flags, environment variables, or the default path.
#[derive(Debug, Clone)]
pub struct PromptSet {
    /// System prompt for the code generator.
    pub codegen: String,
    /// System prompt for the dietary plan call.
    pub dietary: String,
    /// System prompt for the fitness plan call.
    pub fitness: String,
    /// System prompt for plan follow-up questions.
    pub qa: String,
    /// Instruction prefix for article summarization.
    pub summarize: String,
}

impl PromptSet {
    /// Loads prompts from the given directory, falling back to compiled-in defaults.
    ///
    /// Resolution order for `prompt_dir`:
    /// 1. Explicit `prompt_dir` argument (from `--prompt-dir` CLI flag)
    /// 2. `PROMPTBOX_PROMPT_DIR` environment variable
    /// 3. `~/.config/promptbox-rs/prompts/`
    ///
    /// Each file is loaded independently — a missing file uses its default.
    #[must_use]
    pub fn load(prompt_dir: Option<&Path>) -> Self {
        let resolved_dir = prompt_dir
            .map(std::path::PathBuf::from)
            .or_else(|| {
                std::env::var("PROMPTBOX_PROMPT_DIR")
                    .ok()
                    .map(std::path::PathBuf::from)
            })
            .or_else(|| dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR)));

        let load_file = |filename: &str, default: &str| -> String {
            resolved_dir
                .as_ref()
                .map(|dir| dir.join(filename))
                .and_then(|path| std::fs::read_to_string(&path).ok())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            codegen: load_file(CODEGEN_FILENAME, CODEGEN_SYSTEM_PROMPT),
            dietary: load_file(DIETARY_FILENAME, DIETARY_SYSTEM_PROMPT),
            fitness: load_file(FITNESS_FILENAME, FITNESS_SYSTEM_PROMPT),
            qa: load_file(QA_FILENAME, QA_SYSTEM_PROMPT),
            summarize: load_file(SUMMARIZE_FILENAME, SUMMARIZE_INSTRUCTION),
        }
    }

    /// Returns compiled-in defaults without checking the filesystem.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            codegen: CODEGEN_SYSTEM_PROMPT.to_string(),
            dietary: DIETARY_SYSTEM_PROMPT.to_string(),
            fitness: FITNESS_SYSTEM_PROMPT.to_string(),
            qa: QA_SYSTEM_PROMPT.to_string(),
            summarize: SUMMARIZE_INSTRUCTION.to_string(),
        }
    }

    /// Writes the compiled-in default prompts to the given directory.
    ///
    /// Creates the directory if it does not exist. Existing files are
    /// **not** overwritten — use this for initial scaffolding only.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if directory creation or file writing fails.
    pub fn write_defaults(dir: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let templates = [
            (CODEGEN_FILENAME, CODEGEN_SYSTEM_PROMPT),
            (DIETARY_FILENAME, DIETARY_SYSTEM_PROMPT),
            (FITNESS_FILENAME, FITNESS_SYSTEM_PROMPT),
            (QA_FILENAME, QA_SYSTEM_PROMPT),
            (SUMMARIZE_FILENAME, SUMMARIZE_INSTRUCTION),
        ];

        let mut written = Vec::new();
        for (filename, content) in &templates {
            let path = dir.join(filename);
            if !path.exists() {
                std::fs::write(&path, content)?;
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Returns the default prompt directory under the user's home.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn default_dir() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR))
    }
}

/// Builds the code generation prompt for a query.
#[must_use]
pub fn build_codegen_prompt(prompts: &PromptSet, query: &str) -> Prompt {
    Prompt::new(prompts.codegen.clone(), format!("User query: {query}"))
}

/// Builds the dietary plan prompt over a rendered profile.
#[must_use]
pub fn build_dietary_prompt(prompts: &PromptSet, profile_text: &str) -> Prompt {
    Prompt::new(prompts.dietary.clone(), profile_text)
}

/// Builds the fitness plan prompt over a rendered profile.
#[must_use]
pub fn build_fitness_prompt(prompts: &PromptSet, profile_text: &str) -> Prompt {
    Prompt::new(prompts.fitness.clone(), profile_text)
}

/// Builds a follow-up question prompt with both plans as context.
#[must_use]
pub fn build_qa_prompt(
    prompts: &PromptSet,
    meal_plan: &str,
    routine: &str,
    question: &str,
) -> Prompt {
    Prompt::new(
        prompts.qa.clone(),
        format!(
            "Dietary Plan: {meal_plan}\n\nFitness Plan: {routine}\nUser Question: {question}"
        ),
    )
}

/// Builds the user-only summarization prompt over truncated article text.
#[must_use]
pub fn build_summarize_prompt(prompts: &PromptSet, content: &str) -> Prompt {
    Prompt::user_only(format!("{} {content}", prompts.summarize))
}
