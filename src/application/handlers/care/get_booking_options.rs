//! GetBookingOptionsHandler - Query handler for the booking form choices.

use serde::{Deserialize, Serialize};

use crate::domain::care::{live_consultations, LiveConsultation, Specialist};

/// One entry of the specialist drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistOption {
    pub specialist: Specialist,
    pub name: String,
}

/// Choices offered by the "See a Doc" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOptions {
    pub specialists: Vec<SpecialistOption>,
    pub live_consultations: Vec<LiveConsultation>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetBookingOptionsHandler;

impl GetBookingOptionsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> BookingOptions {
        BookingOptions {
            specialists: Specialist::ALL
                .into_iter()
                .map(|specialist| SpecialistOption {
                    specialist,
                    name: specialist.display_name().to_string(),
                })
                .collect(),
            live_consultations: live_consultations(),
        }
    }
}
