//! Care handlers.
//!
//! ## Commands
//! - Acknowledging appointment requests
//!
//! ## Queries
//! - Cost evaluation (budget → specialists)
//! - Booking form options

mod book_appointment;
mod get_booking_options;
mod recommend_specialists;

// Commands
pub use book_appointment::{BookAppointmentCommand, BookAppointmentHandler, BookAppointmentResult};

// Queries
pub use get_booking_options::{BookingOptions, GetBookingOptionsHandler, SpecialistOption};
pub use recommend_specialists::{
    RecommendSpecialistsHandler, RecommendSpecialistsQuery, RecommendSpecialistsResult,
};
