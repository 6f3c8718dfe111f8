//! HTTP DTOs for care endpoints.

use serde::Deserialize;

use crate::application::handlers::RecommendSpecialistsQuery;
use crate::domain::care::{parse_insurance_answer, UrgencyLevel, DEFAULT_BUDGET};
use crate::domain::foundation::ValidationError;

pub use crate::application::handlers::BookingOptions;
pub use crate::domain::care::{BookingAcknowledgement, BookingRequest, CostEvaluation};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters of the cost evaluation calculator.
///
/// Missing values take the calculator defaults: budget 3000, low urgency,
/// insured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostParams {
    pub budget: Option<String>,
    pub urgency: Option<String>,
    pub insurance: Option<String>,
}

impl CostParams {
    pub fn into_query(self) -> Result<RecommendSpecialistsQuery, ValidationError> {
        let budget = match self.budget.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::invalid_format("budget", "expected an integer"))?,
            None => DEFAULT_BUDGET,
        };
        let urgency = match self.urgency.as_deref() {
            Some(raw) => raw.parse::<UrgencyLevel>()?,
            None => UrgencyLevel::default(),
        };
        let has_insurance = match self.insurance.as_deref() {
            Some(raw) => parse_insurance_answer(raw)?,
            None => true,
        };

        Ok(RecommendSpecialistsQuery {
            budget,
            urgency,
            has_insurance,
        })
    }
}
