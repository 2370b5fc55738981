//! OSRM HTTP client.

use anyhow::{Context, Result};
use georoute_core::{
    positional_labels, same_coordinate, validate_anchors, Coordinate, ProviderOutcome,
    RouteProvider, RouteResponse, RouteResult, RouteSource,
};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// HTTP client for an OSRM-compatible driving profile.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    routes: Option<Vec<OsrmRoute>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    geometry: Option<OsrmGeometry>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    #[serde(default)]
    coordinates: Option<Vec<Option<Vec<f64>>>>,
}

#[derive(Debug, Deserialize)]
struct OsrmNearestResponse {
    #[serde(default)]
    waypoints: Option<Vec<OsrmNearestWaypoint>>,
}

#[derive(Debug, Deserialize)]
struct OsrmNearestWaypoint {
    #[serde(default)]
    location: Option<Vec<f64>>,
}

impl OsrmClient {
    /// Create a client whose every HTTP call is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to create OSRM HTTP client")?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace each anchor with its nearest routable point, keeping anchors whose snap failed.
    async fn snap_anchors(&self, anchors: &[Coordinate]) -> Vec<Coordinate> {
        let mut adjusted = Vec::with_capacity(anchors.len());
        for (index, anchor) in anchors.iter().enumerate() {
            match self.snap_to_road(anchor).await {
                Some(candidate) => {
                    if !same_coordinate(&candidate, anchor) {
                        tracing::info!("Point {} snapped from {} to {}", index, anchor, candidate);
                    }
                    adjusted.push(candidate);
                }
                None => adjusted.push(*anchor),
            }
        }
        adjusted
    }

    async fn snap_to_road(&self, anchor: &Coordinate) -> Option<Coordinate> {
        let url = self.nearest_url(anchor);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!("Snap request for {} failed: {}", anchor, err);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!("Snap request for {} returned HTTP {}", anchor, response.status());
            return None;
        }
        let payload: OsrmNearestResponse = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!("Snap response for {} could not be parsed: {}", anchor, err);
                return None;
            }
        };

        let waypoint = payload.waypoints?.into_iter().next()?;
        match waypoint.location.as_deref() {
            Some([lon, lat, ..]) => Some(Coordinate::new(*lat, *lon)),
            _ => None,
        }
    }

    async fn attempt_route(&self, anchors: &[Coordinate], label_count: usize) -> ProviderOutcome {
        let url = self.route_url(anchors);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("OSRM request failed: {}", err);
                return ProviderOutcome::Failed(err.to_string());
            }
        };
        if !response.status().is_success() {
            tracing::warn!("OSRM returned HTTP {}", response.status());
            return ProviderOutcome::Failed(format!("OSRM HTTP {}", response.status()));
        }
        let payload: OsrmResponse = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!("OSRM response could not be parsed: {}", err);
                return ProviderOutcome::Failed(err.to_string());
            }
        };

        let Some(route) = payload.routes.and_then(|routes| routes.into_iter().next()) else {
            if let (Some(origin), Some(destination)) = (anchors.first(), anchors.last()) {
                tracing::warn!("OSRM returned no routes for {} -> {}", origin, destination);
            }
            return ProviderOutcome::NotFound;
        };
        let Some(pairs) = route.geometry.and_then(|geometry| geometry.coordinates) else {
            tracing::warn!("OSRM route has no geometry");
            return ProviderOutcome::NotFound;
        };

        let coordinates: Vec<Coordinate> = pairs
            .iter()
            .flatten()
            .filter_map(|pair| match pair.as_slice() {
                [lon, lat, ..] => Some(Coordinate::new(*lat, *lon)),
                _ => None,
            })
            .collect();
        if coordinates.is_empty() {
            tracing::warn!("OSRM route geometry has no usable coordinate pairs");
            return ProviderOutcome::NotFound;
        }

        ProviderOutcome::Found(RouteResponse {
            nodes: positional_labels(label_count),
            coordinates,
            total_cost: route.distance / 1000.0,
            source: Some(RouteSource::External),
        })
    }

    fn route_url(&self, anchors: &[Coordinate]) -> String {
        let segment = anchors
            .iter()
            .map(format_lon_lat)
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson",
            self.base_url, segment
        )
    }

    fn nearest_url(&self, anchor: &Coordinate) -> String {
        format!(
            "{}/nearest/v1/driving/{}?number=1",
            self.base_url,
            format_lon_lat(anchor)
        )
    }
}

fn format_lon_lat(point: &Coordinate) -> String {
    format!("{:.6},{:.6}", point.lon, point.lat)
}

impl RouteProvider for OsrmClient {
    async fn route(
        &self,
        anchors: &[Coordinate],
        allow_approximation: bool,
    ) -> RouteResult<ProviderOutcome> {
        validate_anchors(anchors)?;

        let effective = if allow_approximation {
            self.snap_anchors(anchors).await
        } else {
            anchors.to_vec()
        };
        let approximated = allow_approximation
            && effective
                .iter()
                .zip(anchors)
                .any(|(snapped, original)| !same_coordinate(snapped, original));

        let direct = self.attempt_route(&effective, anchors.len()).await;
        if matches!(direct, ProviderOutcome::Found(_)) || !approximated {
            return Ok(direct);
        }

        tracing::warn!("Route with snapped points failed, retrying with original points");
        Ok(self.attempt_route(anchors, anchors.len()).await)
    }
}
