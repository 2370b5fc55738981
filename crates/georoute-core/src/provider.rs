//! Seam between the resolver and external routing services.

use std::future::Future;

use crate::error::RouteResult;
use crate::models::{Coordinate, RouteResponse};

/// Result of asking an external provider for a route.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Found(RouteResponse),
    /// The provider answered but had no usable route.
    NotFound,
    /// Transport error, timeout, or a body that could not be decoded.
    Failed(String),
}

impl ProviderOutcome {
    pub fn into_route(self) -> Option<RouteResponse> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}

/// A remote routing service.
///
/// Only input validation may produce `Err`; every provider-side problem is a
/// [`ProviderOutcome`] so callers can fall back.
pub trait RouteProvider: Send + Sync {
    fn route(
        &self,
        anchors: &[Coordinate],
        allow_approximation: bool,
    ) -> impl Future<Output = RouteResult<ProviderOutcome>> + Send;
}

/// Positional labels for externally routed paths: `origin`, `point N`, `destination`.
pub fn positional_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|index| {
            if index == 0 {
                "origin".to_string()
            } else if index == count - 1 {
                "destination".to_string()
            } else {
                format!("point {index}")
            }
        })
        .collect()
}
