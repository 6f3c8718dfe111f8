//! Home page overview assembled from the profile and vitals charts.

use serde::{Deserialize, Serialize};

use super::charts::{weekly_vitals, ChartSeries};
use super::profile::{Metric, PatientProfile};

const HEALTH_OVERVIEW: &str =
    "You're doing great! Keep tracking your vitals and earning points.";

/// Everything the home page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub profile: PatientProfile,
    /// Vitals grid, derived from `profile`
    pub metrics: Vec<Metric>,
    pub health_overview: String,
    pub charts: Vec<ChartSeries>,
}

/// Builds the home page content for the demo patient.
pub fn dashboard_overview() -> DashboardOverview {
    let profile = PatientProfile::demo();
    DashboardOverview {
        metrics: profile.metrics(),
        profile,
        health_overview: HEALTH_OVERVIEW.to_string(),
        charts: weekly_vitals(),
    }
}
