//! HTTP API for the route resolver.

pub mod request_id;
mod routes;

pub use routes::RouteRequest;

use crate::state::AppState;
use axum::Router;

pub fn routes() -> Router<std::sync::Arc<AppState>> {
    routes::create_router()
}

#[cfg(test)]
mod tests;
