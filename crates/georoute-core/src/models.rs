//! Core data models for route resolution.

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// A point in decimal degrees, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Reject non-finite or out-of-range components.
    pub fn validate(&self, index: usize) -> RouteResult<()> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate {
                index,
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Check an anchor list before any routing work happens.
pub fn validate_anchors(anchors: &[Coordinate]) -> RouteResult<()> {
    if anchors.len() < 2 {
        return Err(RouteError::InsufficientAnchors {
            count: anchors.len(),
        });
    }
    for (index, anchor) in anchors.iter().enumerate() {
        anchor.validate(index)?;
    }
    Ok(())
}

/// A named location in the internal graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub coordinate: Coordinate,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            coordinate: Coordinate::new(lat, lon),
        }
    }
}

/// Directed, weighted adjacency entry. Cost is in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub target_id: String,
    pub cost: f64,
}

/// Which backend produced a route, and so which label semantics apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    /// Labels are positional: `origin`, `point N`, `destination`.
    External,
    /// Labels are graph node ids.
    InternalGraph,
}

/// Resolved route returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub nodes: Vec<String>,
    pub coordinates: Vec<Coordinate>,
    /// Kilometers. Infinite when no route exists.
    pub total_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RouteSource>,
}

impl RouteResponse {
    pub fn not_found() -> Self {
        Self {
            nodes: Vec::new(),
            coordinates: Vec::new(),
            total_cost: f64::INFINITY,
            source: None,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.coordinates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_anchors_rejects_single_point() {
        let err = validate_anchors(&[Coordinate::new(-23.55, -46.63)]).unwrap_err();
        assert!(matches!(err, RouteError::InsufficientAnchors { count: 1 }));
    }

    #[test]
    fn validate_anchors_rejects_out_of_range_latitude() {
        let anchors = [Coordinate::new(-23.55, -46.63), Coordinate::new(91.0, 0.0)];
        let err = validate_anchors(&anchors).unwrap_err();
        assert!(matches!(err, RouteError::InvalidCoordinate { index: 1, .. }));
    }

    #[test]
    fn route_response_serializes_camel_case() {
        let response = RouteResponse {
            nodes: vec!["SP".to_string()],
            coordinates: vec![Coordinate::new(-23.5505, -46.6333)],
            total_cost: 0.0,
            source: Some(RouteSource::InternalGraph),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["totalCost"], 0.0);
        assert_eq!(value["source"], "internal_graph");
        assert_eq!(value["coordinates"][0]["lat"], -23.5505);
    }

    #[test]
    fn not_found_has_no_coordinates() {
        let response = RouteResponse::not_found();
        assert!(!response.is_found());
        assert!(response.total_cost.is_infinite());
    }
}
