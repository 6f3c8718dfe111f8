//! Appointment booking and live consultation links.
//!
//! Booking is acknowledged but never scheduled or stored.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::foundation::ValidationError;

/// Specialists offered in the booking form.
///
/// Serialized as the kebab-case key; the form's display names are accepted
/// on input too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specialist {
    #[serde(alias = "General Physician")]
    GeneralPhysician,
    #[serde(alias = "Cardiologist")]
    Cardiologist,
    #[serde(alias = "Nutritionist")]
    Nutritionist,
    #[serde(alias = "Psychologist")]
    Psychologist,
}

impl Specialist {
    /// All bookable specialists, in form order.
    pub const ALL: [Specialist; 4] = [
        Specialist::GeneralPhysician,
        Specialist::Cardiologist,
        Specialist::Nutritionist,
        Specialist::Psychologist,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Specialist::GeneralPhysician => "General Physician",
            Specialist::Cardiologist => "Cardiologist",
            Specialist::Nutritionist => "Nutritionist",
            Specialist::Psychologist => "Psychologist",
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Specialist {
    type Err = ValidationError;

    /// Accepts either the kebab-case key or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Specialist::ALL
            .into_iter()
            .find(|sp| {
                sp.display_name().eq_ignore_ascii_case(wanted)
                    || sp.display_name().replace(' ', "-").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::invalid_input("specialist", s))
    }
}

/// Appointment request captured by the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub specialist: Specialist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Requested,
}

/// Transient receipt for a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAcknowledgement {
    pub reference: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub specialist: Specialist,
    pub status: BookingStatus,
}

/// Acknowledges a booking request.
///
/// `today` is passed in so the check stays independent of the clock.
/// Requests for a day before `today` are rejected.
pub fn book_appointment(
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<BookingAcknowledgement, ValidationError> {
    if request.date < today {
        return Err(ValidationError::invalid_format(
            "date",
            format!("{} is before {}", request.date, today),
        ));
    }

    Ok(BookingAcknowledgement {
        reference: Uuid::new_v4(),
        date: request.date,
        time: request.time,
        specialist: request.specialist,
        status: BookingStatus::Requested,
    })
}

/// A doctor reachable over a video meeting without booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveConsultation {
    pub doctor: String,
    pub meeting_url: String,
}

const LIVE_CONSULTATIONS: [(&str, &str); 2] = [
    ("Dr. Achieng", "https://meet.google.com/abc-defg-hij"),
    ("Dr. Kamau", "https://meet.google.com/xyz-wxyz-mno"),
];

/// Live consultation links shown under the booking form.
pub fn live_consultations() -> Vec<LiveConsultation> {
    LIVE_CONSULTATIONS
        .iter()
        .map(|(doctor, url)| LiveConsultation {
            doctor: doctor.to_string(),
            meeting_url: url.to_string(),
        })
        .collect()
}
