//! GetDashboardOverviewHandler - Query handler for the home page.
//!
//! Returns the patient profile, the vitals grid and the weekly chart series.

use crate::domain::dashboard::{dashboard_overview, DashboardOverview};

/// Result of the dashboard overview query.
pub type GetDashboardOverviewResult = DashboardOverview;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetDashboardOverviewHandler;

impl GetDashboardOverviewHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> GetDashboardOverviewResult {
        dashboard_overview()
    }
}
