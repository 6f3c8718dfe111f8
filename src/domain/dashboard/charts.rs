//! Chart series handed to the renderer as ordered (label, value) pairs.

use serde::{Deserialize, Serialize};

/// Plot type hint. The renderer is free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
    Polar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub unit: String,
    pub kind: ChartKind,
    pub points: Vec<DataPoint>,
}

impl ChartSeries {
    /// Pairs `labels` with `values` positionally; extra entries on either
    /// side are dropped.
    pub fn new(
        title: impl Into<String>,
        unit: impl Into<String>,
        kind: ChartKind,
        labels: &[&str],
        values: &[f64],
    ) -> Self {
        Self {
            title: title.into(),
            unit: unit.into(),
            kind,
            points: labels
                .iter()
                .zip(values)
                .map(|(label, value)| DataPoint {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }
}

const WEEKDAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// The week of tracked vitals shown on the home page.
pub fn weekly_vitals() -> Vec<ChartSeries> {
    vec![
        ChartSeries::new(
            "Heart Rate",
            "bpm",
            ChartKind::Line,
            &WEEKDAYS,
            &[72.0, 76.0, 75.0, 78.0, 77.0],
        ),
        ChartSeries::new(
            "Blood Pressure",
            "mmHg",
            ChartKind::Bar,
            &WEEKDAYS,
            &[120.0, 118.0, 119.0, 117.0, 121.0],
        ),
        ChartSeries::new(
            "Mood Tracker",
            "score",
            ChartKind::Area,
            &WEEKDAYS,
            &[5.0, 6.0, 7.0, 6.0, 8.0],
        ),
        ChartSeries::new(
            "Body Temperature",
            "°C",
            ChartKind::Line,
            &WEEKDAYS,
            &[36.5, 36.7, 36.6, 36.8, 36.7],
        ),
        ChartSeries::new(
            "Hydration",
            "%",
            ChartKind::Polar,
            &WEEKDAYS,
            &[60.0, 62.0, 61.0, 63.0, 65.0],
        ),
    ]
}
