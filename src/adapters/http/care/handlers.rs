//! HTTP handlers for care endpoints.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use chrono::Utc;

use crate::adapters::http::{ApiError, ApiJson, AppState};
use crate::application::handlers::BookAppointmentCommand;

use super::dto::{
    BookingAcknowledgement, BookingOptions, BookingRequest, CostEvaluation, CostParams,
};

/// GET /api/care/specialists?budget=&urgency=&insurance=
///
/// Runs the cost evaluation calculator.
pub async fn recommend_specialists(
    State(state): State<AppState>,
    Query(params): Query<CostParams>,
) -> Result<Json<CostEvaluation>, ApiError> {
    let query = params.into_query()?;
    let evaluation = state.recommend_specialists_handler().handle(query)?;
    Ok(Json(evaluation))
}

/// GET /api/care/booking-options
pub async fn get_booking_options(State(state): State<AppState>) -> Json<BookingOptions> {
    Json(state.booking_options_handler().handle())
}

/// POST /api/care/appointments
///
/// Acknowledges a booking request. Dates are checked against today's UTC date.
pub async fn book_appointment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BookingRequest>,
) -> Result<(StatusCode, Json<BookingAcknowledgement>), ApiError> {
    let command = BookAppointmentCommand {
        request,
        today: Utc::now().date_naive(),
    };
    let ack = state.book_appointment_handler().handle(command)?;
    Ok((StatusCode::ACCEPTED, Json(ack)))
}
