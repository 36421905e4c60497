//! PyGame code generation flow.
//!
//! One prompted call; the response is treated as literal source text and
//! passed through verbatim. Running the result hands it, unvalidated, to
//! the online editor via [`crate::automation`].

use tracing::info;

use crate::core::GeneratedCode;
use crate::error::{Error, Result};
use crate::llm::ChatBackend;
use crate::prompts::{PromptSet, build_codegen_prompt};

/// Generates visualization source for a query.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for a blank query (checked before any
/// call) or an endpoint error from the completion itself.
pub async fn generate(
    backend: &dyn ChatBackend,
    prompts: &PromptSet,
    query: &str,
) -> Result<GeneratedCode> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::EmptyInput { field: "query" });
    }

    info!("generating visualization code");
    let prompt = build_codegen_prompt(prompts, query);
    let response = backend.complete(&prompt).await?;

    Ok(GeneratedCode::new(query, response.into_text()))
}
