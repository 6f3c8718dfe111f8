//! BookAppointmentHandler - Command handler for the booking form.
//!
//! Produces an acknowledgement only. No appointment is scheduled or stored.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::care::{book_appointment, BookingAcknowledgement, BookingRequest};
use crate::domain::foundation::DomainError;

/// Command to book an appointment.
#[derive(Debug, Clone, Copy)]
pub struct BookAppointmentCommand {
    pub request: BookingRequest,
    /// The caller's current date; requests before it are rejected.
    pub today: NaiveDate,
}

pub type BookAppointmentResult = BookingAcknowledgement;

#[derive(Debug, Clone, Copy, Default)]
pub struct BookAppointmentHandler;

impl BookAppointmentHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: BookAppointmentCommand,
    ) -> Result<BookAppointmentResult, DomainError> {
        let ack = book_appointment(&command.request, command.today).map_err(|e| {
            warn!(date = %command.request.date, "Rejected booking request: {}", e);
            DomainError::from(e)
        })?;

        info!(
            reference = %ack.reference,
            specialist = %ack.specialist,
            date = %ack.date,
            "Appointment request acknowledged"
        );
        Ok(ack)
    }
}
