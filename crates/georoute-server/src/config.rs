//! Server configuration from environment.

use georoute_osrm::DEFAULT_BASE_URL;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub osrm_base_url: String,
    /// Bound on every single OSRM HTTP call.
    pub osrm_timeout_ms: u64,
    /// Bound on the whole provider chain (snaps, route, retry) for one request.
    pub provider_budget_ms: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            osrm_base_url: DEFAULT_BASE_URL.to_string(),
            osrm_timeout_ms: 5_000,
            provider_budget_ms: 15_000,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_env("GEOROUTE_PORT").unwrap_or(defaults.server_port),
            osrm_base_url: env::var("OSRM_BASE_URL")
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.osrm_base_url),
            osrm_timeout_ms: parse_env("OSRM_TIMEOUT_MS").unwrap_or(defaults.osrm_timeout_ms),
            provider_budget_ms: parse_env("ROUTE_PROVIDER_BUDGET_MS")
                .unwrap_or(defaults.provider_budget_ms),
            log_format: match env::var("GEOROUTE_LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => defaults.log_format,
            },
        }
    }

    pub fn osrm_timeout(&self) -> Duration {
        Duration::from_millis(self.osrm_timeout_ms.max(1))
    }

    pub fn provider_budget(&self) -> Duration {
        Duration::from_millis(self.provider_budget_ms.max(1))
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
