//! RecommendSpecialistsHandler - Query handler for the cost evaluation calculator.
//!
//! Validates the collected preferences, then applies the budget rule.

use tracing::{debug, warn};

use crate::domain::care::{evaluate_cost, CostEvaluation, CostQuery, UrgencyLevel};
use crate::domain::foundation::DomainError;

/// Query carrying the raw calculator inputs.
#[derive(Debug, Clone, Copy)]
pub struct RecommendSpecialistsQuery {
    pub budget: i64,
    pub urgency: UrgencyLevel,
    pub has_insurance: bool,
}

/// Result of a successful cost evaluation.
pub type RecommendSpecialistsResult = CostEvaluation;

/// Handler for the cost evaluation calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendSpecialistsHandler;

impl RecommendSpecialistsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: RecommendSpecialistsQuery,
    ) -> Result<RecommendSpecialistsResult, DomainError> {
        let cost_query = CostQuery::new(query.budget, query.urgency, query.has_insurance)
            .map_err(|e| {
                warn!(budget = query.budget, "Rejected cost query: {}", e);
                DomainError::from(e)
            })?;

        let evaluation = evaluate_cost(&cost_query);
        debug!(
            budget = evaluation.budget,
            severity = %evaluation.recommendation.severity,
            "Evaluated specialist recommendation"
        );
        Ok(evaluation)
    }
}
