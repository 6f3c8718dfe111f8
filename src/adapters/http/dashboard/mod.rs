//! Dashboard HTTP adapter module.
//!
//! The dashboard is read-only: one endpoint returning the home page content.

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;
use crate::domain::dashboard::DashboardOverview;

/// GET /api/dashboard
pub async fn get_dashboard_overview(State(state): State<AppState>) -> Json<DashboardOverview> {
    Json(state.dashboard_overview_handler().handle())
}

/// Creates the dashboard router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(get_dashboard_overview))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_dashboard_route() {
        let response = dashboard_routes()
            .with_state(AppState::default())
            .oneshot(Request::builder().uri("/api/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["profile"]["name"], "Juma Anderson");
        assert_eq!(body["charts"].as_array().unwrap().len(), 5);
    }
}
