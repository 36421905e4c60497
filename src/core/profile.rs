//! User profile domain model for the health planner.
//!
//! Mirrors the intake form: numeric measurements with basic range
//! constraints and closed option sets for the categorical fields.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CommandError, Error, Result};

/// Biological sex options offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other / unspecified.
    Other,
}

/// Self-reported activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Light exercise 1-3 days a week.
    LightlyActive,
    /// Moderate exercise 3-5 days a week.
    ModeratelyActive,
    /// Hard exercise 6-7 days a week.
    VeryActive,
    /// Physical job or twice-daily training.
    ExtremelyActive,
}

/// Dietary preference options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DietaryPreference {
    /// Vegetarian.
    Vegetarian,
    /// Ketogenic.
    Keto,
    /// Gluten-free.
    GlutenFree,
    /// Low carbohydrate.
    LowCarb,
    /// Dairy-free.
    DairyFree,
}

/// Fitness goal options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitnessGoal {
    /// Weight loss.
    LoseWeight,
    /// Muscle gain.
    GainMuscle,
    /// Endurance.
    Endurance,
    /// General fitness maintenance.
    StayFit,
    /// Strength training.
    StrengthTraining,
}

macro_rules! option_set {
    ($ty:ident, $flag:literal, [$(($variant:ident, $value:literal, $label:literal)),+ $(,)?]) => {
        impl $ty {
            /// Accepted CLI values for this option set.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the human-readable label used in prompts.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s.to_lowercase().as_str() {
                    $($value => Ok(Self::$variant),)+
                    other => Err(Error::Command(CommandError::InvalidArgument(format!(
                        "{}: unknown value '{other}' (expected one of: {})",
                        $flag,
                        Self::VALUES.join(", "),
                    )))),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

option_set!(Sex, "--sex", [
    (Male, "male", "Male"),
    (Female, "female", "Female"),
    (Other, "other", "Other"),
]);

option_set!(ActivityLevel, "--activity-level", [
    (Sedentary, "sedentary", "Sedentary"),
    (LightlyActive, "lightly-active", "Lightly Active"),
    (ModeratelyActive, "moderately-active", "Moderately Active"),
    (VeryActive, "very-active", "Very Active"),
    (ExtremelyActive, "extremely-active", "Extremely Active"),
]);

option_set!(DietaryPreference, "--dietary-preference", [
    (Vegetarian, "vegetarian", "Vegetarian"),
    (Keto, "keto", "Keto"),
    (GlutenFree, "gluten-free", "Gluten-Free"),
    (LowCarb, "low-carb", "Low Carb"),
    (DairyFree, "dairy-free", "Dairy-Free"),
]);

option_set!(FitnessGoal, "--fitness-goal", [
    (LoseWeight, "lose-weight", "Lose Weight"),
    (GainMuscle, "gain-muscle", "Gain Muscle"),
    (Endurance, "endurance", "Endurance"),
    (StayFit, "stay-fit", "Stay Fit"),
    (StrengthTraining, "strength-training", "Strength Training"),
]);

/// Accepted age range in years.
pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 10..=100;
/// Accepted weight range in kilograms.
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<f64> = 20.0..=300.0;
/// Accepted height range in centimeters.
pub const HEIGHT_RANGE_CM: std::ops::RangeInclusive<f64> = 100.0..=250.0;

/// A validated user profile for plan generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    /// Age in years.
    pub age: u8,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Biological sex.
    pub sex: Sex,
    /// Activity level.
    pub activity_level: ActivityLevel,
    /// Dietary preference.
    pub dietary_preference: DietaryPreference,
    /// Fitness goal.
    pub fitness_goal: FitnessGoal,
}

impl UserProfile {
    /// Creates a profile, enforcing the intake form's range constraints.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] when a measurement falls
    /// outside its accepted range.
    pub fn new(
        age: u8,
        weight_kg: f64,
        height_cm: f64,
        sex: Sex,
        activity_level: ActivityLevel,
        dietary_preference: DietaryPreference,
        fitness_goal: FitnessGoal,
    ) -> Result<Self> {
        if !AGE_RANGE.contains(&age) {
            return Err(invalid_range("--age", "years", 10.0, 100.0));
        }
        if !WEIGHT_RANGE_KG.contains(&weight_kg) {
            return Err(invalid_range("--weight-kg", "kg", 20.0, 300.0));
        }
        if !HEIGHT_RANGE_CM.contains(&height_cm) {
            return Err(invalid_range("--height-cm", "cm", 100.0, 250.0));
        }

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            sex,
            activity_level,
            dietary_preference,
            fitness_goal,
        })
    }

    /// Renders the profile block sent as the user message of both plan
    /// prompts.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Age: {}\n\
             Weight: {}kg\n\
             Height: {}cm\n\
             Sex: {}\n\
             Activity Level: {}\n\
             Dietary Preferences: {}\n\
             Fitness Goals: {}",
            self.age,
            self.weight_kg,
            self.height_cm,
            self.sex,
            self.activity_level,
            self.dietary_preference,
            self.fitness_goal,
        )
    }
}

fn invalid_range(flag: &str, unit: &str, min: f64, max: f64) -> Error {
    Error::Command(CommandError::InvalidArgument(format!(
        "{flag}: value out of range ({min}-{max} {unit})"
    )))
}
