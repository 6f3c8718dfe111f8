//! Care module - "See a Doc" rules.
//!
//! - `cost` - budget driven specialist recommendation
//! - `booking` - appointment acknowledgement and live consultation links

mod booking;
mod cost;

pub use booking::{
    book_appointment, live_consultations, BookingAcknowledgement, BookingRequest, BookingStatus,
    LiveConsultation, Specialist,
};
pub use cost::{
    evaluate_cost, parse_insurance_answer, recommend_specialists, CostEvaluation, CostQuery,
    SeverityTier, SpecialistRecommendation, UrgencyLevel, DEFAULT_BUDGET, MAX_BUDGET, MIN_BUDGET,
};
