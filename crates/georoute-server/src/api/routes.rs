//! REST API routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use georoute_core::{Coordinate, RouteError, RouteResult};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::request_id::ensure_request_id;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/routes", post(calculate_route))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(ensure_request_id))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// `[lat, lon]` pairs; first is origin, last is destination.
    pub points: Vec<Vec<f64>>,
    #[serde(default)]
    pub allow_approximation: bool,
}

impl RouteRequest {
    pub fn anchors(&self) -> RouteResult<Vec<Coordinate>> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, pair)| match pair.as_slice() {
                [lat, lon] => Ok(Coordinate::new(*lat, *lon)),
                _ => Err(RouteError::MalformedPoint { index }),
            })
            .collect()
    }
}

// === Handlers ===

async fn calculate_route(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RouteRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected route request body");
            return invalid_request(rejection.body_text());
        }
    };
    let resolved = match request.anchors() {
        Ok(anchors) => {
            state
                .resolver()
                .resolve(&anchors, request.allow_approximation)
                .await
        }
        Err(err) => Err(err),
    };

    match resolved {
        Ok(route) if route.is_found() => {
            tracing::info!(points = route.coordinates.len(), "Route resolved");
            (StatusCode::OK, Json(route)).into_response()
        }
        Ok(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Route not found" })),
        )
            .into_response(),
        Err(err) => {
            tracing::debug!(error = %err, "Rejected route request");
            invalid_request(err.to_string())
        }
    }
}

fn invalid_request(details: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Invalid route request",
            "details": details
        })),
    )
        .into_response()
}
