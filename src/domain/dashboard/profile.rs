//! Display-only patient profile.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::tips::Gender;

/// Patient shown on the home page. Never mutated by any rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub patient_id: String,
    pub blood_type: String,
    pub iris_type: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub points_earned: u32,
    pub next_checkup: NaiveDateTime,
}

/// A label/value tile in the vitals grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl PatientProfile {
    /// The demo patient.
    pub fn demo() -> Self {
        let next_checkup = NaiveDate::from_ymd_opt(2025, 7, 20)
            .zip(NaiveTime::from_hms_opt(10, 0, 0))
            .map(|(d, t)| d.and_time(t))
            .unwrap_or_default();

        Self {
            name: "Juma Anderson".to_string(),
            age: 29,
            gender: Gender::Male,
            patient_id: "BSN-2045".to_string(),
            blood_type: "O+".to_string(),
            iris_type: "Type B".to_string(),
            weight_kg: 65.0,
            height_cm: 170.0,
            points_earned: 3200,
            next_checkup,
        }
    }

    /// Body mass index rounded to one decimal place.
    pub fn bmi(&self) -> f64 {
        if self.height_cm <= 0.0 {
            return 0.0;
        }
        let height_m = self.height_cm / 100.0;
        (self.weight_kg / (height_m * height_m) * 10.0).round() / 10.0
    }

    /// Vitals grid tiles, row by row.
    pub fn metrics(&self) -> Vec<Metric> {
        let tiles = [
            ("Name", self.name.clone()),
            ("Age", self.age.to_string()),
            ("Gender", self.gender.to_string()),
            ("ID", self.patient_id.clone()),
            ("Blood Type", self.blood_type.clone()),
            ("Iris Type", self.iris_type.clone()),
            ("Weight", format!("{}kg", self.weight_kg)),
            ("Height", format!("{}cm", self.height_cm)),
            ("BMI", format!("{:.1}", self.bmi())),
            ("Points Earned", group_thousands(self.points_earned)),
            (
                "Next Checkup",
                self.next_checkup.format("%-d %B %Y @ %I:%M%p").to_string(),
            ),
        ];

        tiles
            .into_iter()
            .map(|(label, value)| Metric {
                label: label.to_string(),
                value,
            })
            .collect()
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric<'a>(metrics: &'a [Metric], label: &str) -> &'a str {
        metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
            .unwrap()
    }

    #[test]
    fn demo_bmi_is_22_5() {
        assert!((PatientProfile::demo().bmi() - 22.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_height_gives_zero_bmi() {
        let mut profile = PatientProfile::demo();
        profile.height_cm = 0.0;
        assert_eq!(profile.bmi(), 0.0);
    }

    #[test]
    fn metrics_render_like_the_vitals_grid() {
        let metrics = PatientProfile::demo().metrics();
        assert_eq!(metrics.len(), 11);
        assert_eq!(metric(&metrics, "Name"), "Juma Anderson");
        assert_eq!(metric(&metrics, "Weight"), "65kg");
        assert_eq!(metric(&metrics, "Height"), "170cm");
        assert_eq!(metric(&metrics, "BMI"), "22.5");
        assert_eq!(metric(&metrics, "Points Earned"), "3,200");
        assert_eq!(metric(&metrics, "Next Checkup"), "20 July 2025 @ 10:00AM");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
