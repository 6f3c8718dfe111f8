//! Route configuration for care endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{book_appointment, get_booking_options, recommend_specialists};
use crate::adapters::http::AppState;

/// Creates the care router.
///
/// Routes:
/// - `GET /api/care/specialists` - Cost evaluation calculator
/// - `GET /api/care/booking-options` - Specialists and live consultation links
/// - `POST /api/care/appointments` - Acknowledge a booking request
pub fn care_routes() -> Router<AppState> {
    Router::new()
        .route("/api/care/specialists", get(recommend_specialists))
        .route("/api/care/booking-options", get(get_booking_options))
        .route("/api/care/appointments", post(book_appointment))
}
