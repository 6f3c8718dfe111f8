//! Dashboard module - home page content.

pub mod charts;
pub mod overview;
pub mod profile;

pub use charts::{weekly_vitals, ChartKind, ChartSeries, DataPoint};
pub use overview::{dashboard_overview, DashboardOverview};
pub use profile::{Metric, PatientProfile};
