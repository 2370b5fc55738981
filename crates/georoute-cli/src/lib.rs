//! Shared helpers for the georoute command-line client.

use anyhow::{bail, Context, Result};
use georoute_core::{Coordinate, RouteResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteRequestBody {
    points: Vec<[f64; 2]>,
    allow_approximation: bool,
}

/// Parse `LAT,LON` as typed on the command line.
pub fn parse_point(raw: &str) -> Result<Coordinate, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{raw}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    Ok(Coordinate::new(lat, lon))
}

/// Client for `POST /api/routes`.
pub struct RouteClient {
    base_url: String,
    client: reqwest::Client,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns `Ok(None)` when the server reports that no route exists.
    pub async fn resolve(
        &self,
        points: &[Coordinate],
        allow_approximation: bool,
    ) -> Result<Option<RouteResponse>> {
        let url = format!("{}/api/routes", self.base_url);
        let body = RouteRequestBody {
            points: points.iter().map(|p| [p.lat, p.lon]).collect(),
            allow_approximation,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("failed to reach {url}"))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("server returned HTTP {status}: {detail}");
        }
        let route = response
            .json::<RouteResponse>()
            .await
            .context("invalid route response")?;
        Ok(Some(route))
    }
}
