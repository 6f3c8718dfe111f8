//! Tip records and the built-in gender tables.

use serde::{Deserialize, Serialize};

use super::Gender;
use crate::domain::foundation::ValidationError;

/// Tips shown for one category, plus a single warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSet {
    pub headline: String,
    pub tips: Vec<String>,
    pub warning: String,
}

impl TipSet {
    /// Rejects records that would render as an empty panel.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.headline.trim().is_empty() {
            return Err(ValidationError::empty_field("headline"));
        }
        if self.tips.is_empty() || self.tips.iter().any(|t| t.trim().is_empty()) {
            return Err(ValidationError::empty_field("tips"));
        }
        if self.warning.trim().is_empty() {
            return Err(ValidationError::empty_field("warning"));
        }
        Ok(())
    }
}

const MALE_HEADLINE: &str = "Tips for Men:";
const MALE_TIPS: [&str; 4] = [
    "Regular prostate checks.",
    "Monitor blood pressure.",
    "Exercise regularly.",
    "Limit alcohol and tobacco use.",
];
const MALE_WARNING: &str = "Avoid self-medication. Always consult a qualified practitioner.";

const FEMALE_HEADLINE: &str = "Tips for Women:";
const FEMALE_TIPS: [&str; 4] = [
    "Regular breast exams.",
    "Maintain bone density.",
    "Balanced diet rich in iron.",
    "Routine pap smears.",
];
const FEMALE_WARNING: &str = "Early detection saves lives. Don't skip annual checkups.";

fn tip_set(headline: &str, tips: &[&str], warning: &str) -> TipSet {
    TipSet {
        headline: headline.to_string(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
        warning: warning.to_string(),
    }
}

/// Health-tip rule over the closed gender enum.
pub fn get_health_tips(gender: Gender) -> TipSet {
    match gender {
        Gender::Male => tip_set(MALE_HEADLINE, &MALE_TIPS, MALE_WARNING),
        Gender::Female => tip_set(FEMALE_HEADLINE, &FEMALE_TIPS, FEMALE_WARNING),
    }
}
