//! Shared HTTP error type.
//!
//! Every endpoint reports failures as `{code, message, details?}`.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(path: &str) -> Self {
        Self::new("NOT_FOUND", format!("No route for {}", path))
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = (!err.details.is_empty())
            .then(|| serde_json::to_value(&err.details).ok())
            .flatten();
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.code.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let err: ApiError = ValidationError::invalid_input("gender", "x").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_content_unavailable_is_internal() {
        let err = ApiError(DomainError::new(ErrorCode::ContentUnavailable, "catalog gone"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_carries_details() {
        let domain: DomainError = ValidationError::out_of_range("budget", 1000, 10000, 1).into();
        let response = ErrorResponse::from(&domain);

        assert_eq!(response.code, "OUT_OF_RANGE");
        let details = response.details.unwrap();
        assert_eq!(details["field"], "budget");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let domain = DomainError::new(ErrorCode::InternalError, "boom");
        let json = serde_json::to_value(ErrorResponse::from(&domain)).unwrap();
        assert!(json.get("details").is_none());
    }
}
