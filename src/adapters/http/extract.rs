//! Request body extractor that reports failures in the shared error body.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body whose rejections become `400 INVALID_INPUT` instead of axum's
/// plain-text 4xx responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError(
            DomainError::new(ErrorCode::InvalidInput, rejection.body_text())
                .with_detail("field", "body"),
        )
    }
}
