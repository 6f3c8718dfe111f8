//! Dashboard handlers.
//!
//! Read-only queries for the home page.

mod get_dashboard_overview;

pub use get_dashboard_overview::{GetDashboardOverviewHandler, GetDashboardOverviewResult};
