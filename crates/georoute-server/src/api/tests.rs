use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> axum::Router {
    // Nothing listens on the discard port, so every request exercises the fallback.
    let config = Config {
        osrm_base_url: "http://127.0.0.1:9/".to_string(),
        osrm_timeout_ms: 500,
        provider_budget_ms: 2_000,
        ..Config::default()
    };
    let state = Arc::new(AppState::new(config).expect("app state"));
    api::routes().with_state(state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn route_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/routes")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_check() {
    let app = setup_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_provider_falls_back_to_internal_graph() {
    let app = setup_app();

    let response = app
        .oneshot(route_request(json!({
            "points": [[-22.9099, -47.0626], [-12.9777, -38.5016]],
            "allowApproximation": true
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["nodes"], json!(["SP", "BH", "SSA"]));
    assert_eq!(body["source"], "internal_graph");
    assert_eq!(body["coordinates"].as_array().unwrap().len(), 4);
    assert_eq!(body["coordinates"][0]["lat"], -22.9099);
    let total = body["totalCost"].as_f64().unwrap();
    assert!((total - 1455.47).abs() < 0.5, "total {total}");
}

#[tokio::test]
async fn single_point_is_bad_request() {
    let app = setup_app();

    let response = app
        .oneshot(route_request(json!({ "points": [[-23.5505, -46.6333]] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid route request");
    assert!(body["details"].as_str().unwrap().contains("origin and destination"));
}

#[tokio::test]
async fn malformed_pair_is_bad_request() {
    let app = setup_app();

    let response = app
        .oneshot(route_request(json!({
            "points": [[-23.5505, -46.6333], [-12.9777]]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["details"], "point 1 must contain exactly lat and lon");
}

#[tokio::test]
async fn non_numeric_coordinate_is_bad_request() {
    let app = setup_app();

    let response = app
        .oneshot(route_request(json!({
            "points": [[-23.5505, "x"], [-12.9777, -38.5016]]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid route request");
    assert!(body["details"].as_str().unwrap().contains("invalid type"));
}

#[tokio::test]
async fn missing_points_is_bad_request() {
    let app = setup_app();

    let response = app
        .oneshot(route_request(json!({ "allowApproximation": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid route request");
    assert!(body["details"].as_str().unwrap().contains("points"));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let app = setup_app();

    let mut request = route_request(json!({ "points": [] }));
    request
        .headers_mut()
        .insert("x-request-id", "trace-me-123".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn request_id_is_generated_when_missing() {
    let app = setup_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
