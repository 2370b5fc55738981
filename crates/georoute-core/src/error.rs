//! Route resolution error type.

use thiserror::Error;

/// Hard errors: invalid input and graph construction defects.
///
/// Provider trouble is never reported here; see
/// [`ProviderOutcome`](crate::provider::ProviderOutcome).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("at least origin and destination are required, got {count} point(s)")]
    InsufficientAnchors { count: usize },

    #[error("point {index} must contain exactly lat and lon")]
    MalformedPoint { index: usize },

    #[error("point {index} is not a valid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { index: usize, lat: f64, lon: f64 },

    #[error("node {0} not found in graph")]
    UnknownNode(String),

    #[error("graph has no registered nodes")]
    EmptyGraph,

    #[error("cannot connect unregistered node {0}")]
    UnregisteredNode(String),

    #[error("node {0} registered twice")]
    DuplicateNode(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
