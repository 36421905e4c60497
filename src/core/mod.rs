//! Core domain models for promptbox.
//!
//! This module contains the fundamental data structures used throughout the
//! three apps: prompts, responses, credentials, user profiles, plan sessions,
//! and news records. These are pure domain models with no I/O dependencies.

pub mod code;
pub mod credential;
pub mod news;
pub mod plan;
pub mod profile;
pub mod prompt;
pub mod response;

pub use code::GeneratedCode;
pub use credential::Credential;
pub use news::{FeedEntry, NewsItem, NewsReport};
pub use plan::{DietaryPlan, FitnessPlan, PlanSession, QaExchange};
pub use profile::{ActivityLevel, DietaryPreference, FitnessGoal, Sex, UserProfile};
pub use prompt::Prompt;
pub use response::ModelResponse;
