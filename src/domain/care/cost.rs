//! Cost evaluation - maps a budget to a severity tier and specialist list.
//!
//! | Budget (Kshs) | Tier | Specialists |
//! |---------------|------|-------------|
//! | < 2500 | limited | General Physician |
//! | 2500..5000 | moderate | Nutritionist, Psychologist |
//! | >= 5000 | full | Cardiologist, All Specialists |
//!
//! The lower bound of every bracket is inclusive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Smallest budget the cost calculator accepts.
pub const MIN_BUDGET: i64 = 1000;

/// Largest budget the cost calculator accepts.
pub const MAX_BUDGET: i64 = 10000;

/// Budget preselected by the calculator.
pub const DEFAULT_BUDGET: i64 = 3000;

const MODERATE_THRESHOLD: i64 = 2500;
const FULL_THRESHOLD: i64 = 5000;

/// Three-level classification of specialist access by budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Limited,
    Moderate,
    Full,
}

impl SeverityTier {
    /// Classifies a budget. Total over `i64`: values outside the calculator
    /// range fall into the nearest bracket.
    pub fn for_budget(budget: i64) -> Self {
        if budget < MODERATE_THRESHOLD {
            SeverityTier::Limited
        } else if budget < FULL_THRESHOLD {
            SeverityTier::Moderate
        } else {
            SeverityTier::Full
        }
    }

    /// Label used on the wire and in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Limited => "limited",
            SeverityTier::Moderate => "moderate",
            SeverityTier::Full => "full",
        }
    }

    /// Specialists reachable within this tier, in display order.
    pub fn specialists(&self) -> &'static [&'static str] {
        match self {
            SeverityTier::Limited => &["General Physician"],
            SeverityTier::Moderate => &["Nutritionist", "Psychologist"],
            SeverityTier::Full => &["Cardiologist", "All Specialists"],
        }
    }

    /// Advisory shown alongside the specialist list.
    pub fn advisory(&self) -> &'static str {
        match self {
            SeverityTier::Limited => "Limited to general care and checkups.",
            SeverityTier::Moderate => "Good options for most outpatient services.",
            SeverityTier::Full => "All services available.",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Output of the specialist recommendation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistRecommendation {
    pub severity: SeverityTier,
    pub specialists: Vec<String>,
    pub advisory: String,
}

/// Maps a budget to its recommended specialists.
///
/// Never fails. Range checking belongs to [`CostQuery::new`].
pub fn recommend_specialists(budget: i64) -> SpecialistRecommendation {
    let severity = SeverityTier::for_budget(budget);
    SpecialistRecommendation {
        severity,
        specialists: severity.specialists().iter().map(|s| s.to_string()).collect(),
        advisory: severity.advisory().to_string(),
    }
}

/// How soon the patient needs to be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Low,
    Moderate,
    High,
}

impl UrgencyLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Moderate => "Moderate",
            UrgencyLevel::High => "High",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for UrgencyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(UrgencyLevel::Low),
            "moderate" => Ok(UrgencyLevel::Moderate),
            "high" => Ok(UrgencyLevel::High),
            _ => Err(ValidationError::invalid_input("urgency", s)),
        }
    }
}

/// Parses the "Do you have insurance?" answer.
///
/// Accepts yes/no and true/false in any case.
pub fn parse_insurance_answer(answer: &str) -> Result<bool, ValidationError> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(ValidationError::invalid_input("insurance", answer)),
    }
}

/// Input collected by the cost evaluation calculator.
///
/// Only [`CostQuery::new`] builds one, so the budget is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostQuery {
    budget: i64,
    urgency: UrgencyLevel,
    has_insurance: bool,
}

impl CostQuery {
    /// Creates a query, rejecting budgets outside the calculator range.
    pub fn new(
        budget: i64,
        urgency: UrgencyLevel,
        has_insurance: bool,
    ) -> Result<Self, ValidationError> {
        if !(MIN_BUDGET..=MAX_BUDGET).contains(&budget) {
            return Err(ValidationError::out_of_range(
                "budget",
                MIN_BUDGET,
                MAX_BUDGET,
                budget,
            ));
        }
        Ok(Self {
            budget,
            urgency,
            has_insurance,
        })
    }

    pub fn budget(&self) -> i64 {
        self.budget
    }

    pub fn urgency(&self) -> UrgencyLevel {
        self.urgency
    }

    pub fn has_insurance(&self) -> bool {
        self.has_insurance
    }
}

impl Default for CostQuery {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            urgency: UrgencyLevel::default(),
            has_insurance: true,
        }
    }
}

/// Recommendation together with the preferences it was computed from.
///
/// Urgency and insurance are echoed back; only the budget drives the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEvaluation {
    pub budget: i64,
    pub urgency: UrgencyLevel,
    pub has_insurance: bool,
    pub recommendation: SpecialistRecommendation,
}

/// Runs the calculator for a validated query.
pub fn evaluate_cost(query: &CostQuery) -> CostEvaluation {
    CostEvaluation {
        budget: query.budget(),
        urgency: query.urgency(),
        has_insurance: query.has_insurance(),
        recommendation: recommend_specialists(query.budget()),
    }
}
