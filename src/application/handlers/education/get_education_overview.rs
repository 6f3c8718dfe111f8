//! GetEducationOverviewHandler - Query handler for the education landing page.

use crate::domain::education::{education_overview, EducationOverview};

#[derive(Debug, Clone, Copy, Default)]
pub struct GetEducationOverviewHandler;

impl GetEducationOverviewHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> EducationOverview {
        education_overview()
    }
}
