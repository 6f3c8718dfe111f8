//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own routes module; [`api_router`] merges them and
//! applies the cross-cutting layers (timeout, CORS, request tracing).

pub mod care;
pub mod dashboard;
pub mod education;
pub mod tips;

mod error;
mod extract;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use extract::ApiJson;
pub use state::AppState;

use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{FeatureFlags, ServerConfig};

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
        .into_response()
}

/// Builds the full application router with state and layers applied.
pub fn api_router(state: AppState, server: &ServerConfig, features: &FeatureFlags) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .merge(dashboard::dashboard_routes())
        .merge(care::care_routes())
        .merge(tips::tips_routes())
        .merge(education::education_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server));

    if features.enable_tracing {
        router = router.layer(
            TraceLayer::new_for_http()
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );
    }

    router
}

/// Permissive CORS in development when no origins are configured, otherwise
/// only the listed origins.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        if server.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
