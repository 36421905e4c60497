//! Plan session domain models for the health planner.
//!
//! A [`PlanSession`] is the explicit per-invocation record that replaces
//! UI-framework session storage: created once plan generation succeeds,
//! extended by each question/answer exchange, and dropped on teardown.
//! Nothing here is persisted.

use serde::Serialize;

use super::profile::UserProfile;

/// A generated dietary plan with its fixed framing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DietaryPlan {
    /// Why the plan is suitable for the profile.
    pub why_this_plan_works: String,
    /// The model-generated meal plan, verbatim.
    pub meal_plan: String,
    /// Fixed considerations shown alongside the plan.
    pub important_considerations: String,
}

/// A generated fitness plan with its fixed framing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitnessPlan {
    /// Goal statement shown alongside the routine.
    pub goals: String,
    /// The model-generated workout routine, verbatim.
    pub routine: String,
    /// Fixed tips shown alongside the plan.
    pub tips: String,
}

/// One follow-up question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaExchange {
    /// The user's question.
    pub question: String,
    /// The model's answer, verbatim.
    pub answer: String,
}

/// Session record for one planning interaction.
///
/// Holds the generated plans and the ordered question/answer history for
/// the lifetime of a single command invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSession {
    /// The profile the plans were generated from.
    pub profile: UserProfile,
    /// The dietary plan.
    pub dietary: DietaryPlan,
    /// The fitness plan.
    pub fitness: FitnessPlan,
    qa: Vec<QaExchange>,
}

impl PlanSession {
    /// Creates a session from freshly generated plans.
    #[must_use]
    pub fn new(profile: UserProfile, dietary: DietaryPlan, fitness: FitnessPlan) -> Self {
        Self {
            profile,
            dietary,
            fitness,
            qa: Vec::new(),
        }
    }

    /// Appends a question/answer exchange to the session history.
    pub fn push_qa(&mut self, exchange: QaExchange) {
        self.qa.push(exchange);
    }

    /// Returns the question/answer history in ask order.
    #[must_use]
    pub fn qa(&self) -> &[QaExchange] {
        &self.qa
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::core::profile::{
        ActivityLevel, DietaryPreference, FitnessGoal, Sex,
    };

    fn session() -> PlanSession {
        let profile = UserProfile::new(
            25,
            60.0,
            165.0,
            Sex::Female,
            ActivityLevel::VeryActive,
            DietaryPreference::Vegetarian,
            FitnessGoal::Endurance,
        )
        .unwrap();
        PlanSession::new(
            profile,
            DietaryPlan {
                why_this_plan_works: "balanced".to_string(),
                meal_plan: "eat well".to_string(),
                important_considerations: "hydrate".to_string(),
            },
            FitnessPlan {
                goals: "endure".to_string(),
                routine: "run".to_string(),
                tips: "rest".to_string(),
            },
        )
    }

    #[test]
    fn test_new_session_has_no_qa() {
        assert!(session().qa().is_empty());
    }

    #[test]
    fn test_qa_preserves_order() {
        let mut s = session();
        s.push_qa(QaExchange {
            question: "q1".to_string(),
            answer: "a1".to_string(),
        });
        s.push_qa(QaExchange {
            question: "q2".to_string(),
            answer: "a2".to_string(),
        });
        let history = s.qa();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].question, "q1");
        assert_eq!(history[1].answer, "a2");
    }
}
