//! Health and fitness planning flow.
//!
//! Two independent prompted calls over the same rendered profile, then an
//! optional question loop that feeds both generated plans back as
//! context. The session record is explicit; nothing lives in framework
//! state.

use tracing::info;

use crate::core::{DietaryPlan, FitnessPlan, PlanSession, QaExchange, UserProfile};
use crate::error::{Error, Result};
use crate::llm::ChatBackend;
use crate::prompts::{PromptSet, build_dietary_prompt, build_fitness_prompt, build_qa_prompt};

/// Fixed framing line for the dietary plan.
pub const WHY_THIS_PLAN_WORKS: &str = "Balanced macronutrients and tailored calorie intake.";

/// Fixed considerations shown with every dietary plan.
pub const IMPORTANT_CONSIDERATIONS: &str = "\
- Hydration: Drink plenty of water throughout the day.
- Include fiber-rich foods for digestion.
- Ensure adequate intake of vitamins and minerals.";

/// Fixed goal statement shown with every fitness plan.
pub const FITNESS_GOALS: &str = "Improve strength, endurance, and overall fitness.";

/// Fixed tips shown with every fitness plan.
pub const FITNESS_TIPS: &str = "\
- Track progress weekly.
- Maintain proper form in exercises.
- Stay consistent and allow for recovery days.";

/// Generates the dietary and fitness plans for a profile.
///
/// The two calls are independent and performed sequentially; a failure in
/// either aborts the run before a session exists.
///
/// # Errors
///
/// Returns an endpoint error from either completion call.
pub async fn generate_plans(
    backend: &dyn ChatBackend,
    prompts: &PromptSet,
    profile: UserProfile,
) -> Result<PlanSession> {
    let rendered = profile.render();

    info!("generating dietary plan");
    let dietary_response = backend
        .complete(&build_dietary_prompt(prompts, &rendered))
        .await?;

    info!("generating fitness plan");
    let fitness_response = backend
        .complete(&build_fitness_prompt(prompts, &rendered))
        .await?;

    let dietary = DietaryPlan {
        why_this_plan_works: WHY_THIS_PLAN_WORKS.to_string(),
        meal_plan: dietary_response.into_text(),
        important_considerations: IMPORTANT_CONSIDERATIONS.to_string(),
    };
    let fitness = FitnessPlan {
        goals: FITNESS_GOALS.to_string(),
        routine: fitness_response.into_text(),
        tips: FITNESS_TIPS.to_string(),
    };

    Ok(PlanSession::new(profile, dietary, fitness))
}

/// Answers one follow-up question against the session's plans.
///
/// The generated meal plan and routine are concatenated as context ahead
/// of the question; the exchange is appended to the session history.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for a blank question (checked before any
/// call) or an endpoint error from the completion.
pub async fn answer_question(
    backend: &dyn ChatBackend,
    prompts: &PromptSet,
    session: &mut PlanSession,
    question: &str,
) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        return Err(Error::EmptyInput { field: "question" });
    }

    info!("answering follow-up question");
    let prompt = build_qa_prompt(
        prompts,
        &session.dietary.meal_plan,
        &session.fitness.routine,
        question,
    );
    let answer = backend.complete(&prompt).await?.into_text();

    session.push_qa(QaExchange {
        question: question.to_string(),
        answer,
    });
    Ok(())
}
