//! Care HTTP adapter module.
//!
//! Provides the "See a Doc" endpoints: cost evaluation and booking.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::care_routes;
