//! Quiz module selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The three interactive education modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizModule {
    NutritionBasics,
    MentalHealth,
    ExerciseEssentials,
}

impl QuizModule {
    pub const ALL: [QuizModule; 3] = [
        QuizModule::NutritionBasics,
        QuizModule::MentalHealth,
        QuizModule::ExerciseEssentials,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            QuizModule::NutritionBasics => "Nutrition Basics",
            QuizModule::MentalHealth => "Mental Health",
            QuizModule::ExerciseEssentials => "Exercise Essentials",
        }
    }

    /// URL-safe key, same as the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            QuizModule::NutritionBasics => "nutrition-basics",
            QuizModule::MentalHealth => "mental-health",
            QuizModule::ExerciseEssentials => "exercise-essentials",
        }
    }
}

impl fmt::Display for QuizModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for QuizModule {
    type Err = ValidationError;

    /// Accepts the key (`mental-health`) or the display name (`Mental Health`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        QuizModule::ALL
            .into_iter()
            .find(|m| {
                m.key().eq_ignore_ascii_case(wanted)
                    || m.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::invalid_input("module", s))
    }
}
