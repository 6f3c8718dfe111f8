//! Route configuration for education endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_module, get_overview, submit_answers};
use crate::adapters::http::AppState;

/// Creates the education router.
///
/// Routes:
/// - `GET /api/education` - Videos, module list and progress
/// - `GET /api/education/modules/:module` - Questions of one module
/// - `POST /api/education/modules/:module/answers` - Submit answers (not graded)
pub fn education_routes() -> Router<AppState> {
    Router::new()
        .route("/api/education", get(get_overview))
        .route("/api/education/modules/:module", get(get_module))
        .route("/api/education/modules/:module/answers", post(submit_answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = education_routes()
            .with_state(AppState::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_overview() {
        let (status, body) = send(get("/api/education")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["modules"].as_array().unwrap().len(), 3);
        assert_eq!(body["progress"]["completed_percent"], 60);
    }

    #[tokio::test]
    async fn test_module_by_key() {
        let (status, body) = send(get("/api/education/modules/nutrition-basics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["module"], "nutrition-basics");
        assert_eq!(body["questions"][0]["kind"], "single-choice");
    }

    #[tokio::test]
    async fn test_unknown_module_is_bad_request() {
        let (status, body) = send(get("/api/education/modules/yoga")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_submit_answers() {
        let request = post_json(
            "/api/education/modules/exercise-essentials/answers",
            serde_json::json!({
                "answers": [
                    {"question": 0, "type": "single-choice", "option": 1},
                    {"question": 1, "type": "multi-choice", "options": [0, 2]}
                ]
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answered"], 2);
        assert_eq!(body["unanswered"], 0);
    }

    #[tokio::test]
    async fn test_submit_out_of_range_scale() {
        let request = post_json(
            "/api/education/modules/mental-health/answers",
            serde_json::json!({
                "answers": [{"question": 0, "type": "scale", "value": 42}]
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "OUT_OF_RANGE");
    }
}
