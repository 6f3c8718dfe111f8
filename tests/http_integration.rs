//! Integration tests for the assembled HTTP API.
//!
//! These tests drive the full router the binary serves:
//! 1. Routes from every area are mounted under one state
//! 2. Errors use the shared `{code, message}` body
//! 3. A YAML tip catalog flows from disk to the tips endpoints

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::io::Write;
use tower::ServiceExt;

use biosentinel::adapters::content::source_for;
use biosentinel::adapters::http::{api_router, AppState};
use biosentinel::config::{FeatureFlags, ServerConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(state: AppState) -> Router {
    api_router(state, &ServerConfig::default(), &FeatureFlags::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn every_area_is_mounted() {
    for uri in [
        "/health",
        "/api/dashboard",
        "/api/care/specialists",
        "/api/care/booking-options",
        "/api/tips",
        "/api/tips/female",
        "/api/education",
        "/api/education/modules/nutrition-basics",
    ] {
        let (status, _) = send(app(AppState::default()), get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{} not served", uri);
    }
}

#[tokio::test]
async fn unknown_route_uses_error_body() {
    let (status, body) = send(app(AppState::default()), get("/api/records")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("/api/records"));
}

// =============================================================================
// Care
// =============================================================================

#[tokio::test]
async fn budget_brackets_follow_thresholds() {
    let cases = [
        (1000, "limited"),
        (2499, "limited"),
        (2500, "moderate"),
        (4999, "moderate"),
        (5000, "full"),
        (10000, "full"),
    ];
    for (budget, severity) in cases {
        let uri = format!("/api/care/specialists?budget={}", budget);
        let (status, body) = send(app(AppState::default()), get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation"]["severity"], severity, "budget {}", budget);
    }
}

#[tokio::test]
async fn future_booking_is_acknowledged() {
    let date = (Utc::now().date_naive() + Duration::days(3)).to_string();
    let (status, body) = send(
        app(AppState::default()),
        post_json(
            "/api/care/appointments",
            json!({ "date": date, "time": "10:30:00", "specialist": "cardiologist" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["date"], date);
    assert_eq!(body["specialist"], "cardiologist");
    assert_eq!(body["status"], "requested");
    assert!(body["reference"].as_str().is_some());
}

#[tokio::test]
async fn past_booking_is_rejected() {
    let date = (Utc::now().date_naive() - Duration::days(1)).to_string();
    let (status, body) = send(
        app(AppState::default()),
        post_json(
            "/api/care/appointments",
            json!({ "date": date, "time": "09:00:00", "specialist": "nutritionist" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn unknown_specialist_is_invalid_input() {
    let date = (Utc::now().date_naive() + Duration::days(1)).to_string();
    let (status, body) = send(
        app(AppState::default()),
        post_json(
            "/api/care/appointments",
            json!({ "date": date, "time": "09:00:00", "specialist": "dentist" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["details"]["field"], "body");
}

#[tokio::test]
async fn specialist_display_name_is_accepted_in_body() {
    let date = (Utc::now().date_naive() + Duration::days(1)).to_string();
    let (status, body) = send(
        app(AppState::default()),
        post_json(
            "/api/care/appointments",
            json!({ "date": date, "time": "09:00:00", "specialist": "General Physician" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["specialist"], "general-physician");
}

#[tokio::test]
async fn malformed_booking_json_is_invalid_input() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/care/appointments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"date\":"))
        .unwrap();
    let (status, body) = send(app(AppState::default()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

// =============================================================================
// Tips from a YAML catalog
// =============================================================================

#[tokio::test]
async fn yaml_catalog_is_served() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        r#"
categories:
  - key: male
    headline: "Tips for Men:"
    tips:
      - Regular prostate checks.
    warning: Avoid self-medication. Always consult a qualified practitioner.
  - key: teens
    headline: "Tips for Teens:"
    tips:
      - Sleep at least eight hours.
      - Limit sugary drinks.
    warning: Talk to a parent or doctor about persistent symptoms.
"#
    )
    .unwrap();

    let catalog = source_for(Some(file.path())).load().await.unwrap();
    let state = AppState::new(catalog);

    let (status, body) = send(app(state.clone()), get("/api/tips")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"], json!(["male", "teens"]));

    let (status, body) = send(app(state.clone()), get("/api/tips/teens")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tips"].as_array().unwrap().len(), 2);

    let (status, body) = send(app(state), get("/api/tips/female")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

// =============================================================================
// Education
// =============================================================================

#[tokio::test]
async fn quiz_answers_are_recorded() {
    let (status, body) = send(
        app(AppState::default()),
        post_json(
            "/api/education/modules/mental-health/answers",
            json!({
                "answers": [
                    { "question": 0, "type": "scale", "value": 7 }
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["module"], "mental-health");
    assert_eq!(body["answered"], 1);
}

#[tokio::test]
async fn unknown_answer_type_is_invalid_input() {
    let (status, body) = send(
        app(AppState::default()),
        post_json(
            "/api/education/modules/mental-health/answers",
            json!({
                "answers": [
                    { "question": 0, "type": "slider", "value": 7 }
                ]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}
