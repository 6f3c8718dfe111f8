//! Route configuration for tips endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_tips, list_categories};
use crate::adapters::http::AppState;

/// Creates the tips router.
///
/// Routes:
/// - `GET /api/tips` - Registered categories
/// - `GET /api/tips/:category` - Tips for one category
pub fn tips_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tips", get(list_categories))
        .route("/api/tips/:category", get(get_tips))
}
