//! Shared, read-only application state.

use anyhow::{Context, Result};
use georoute_core::GraphStore;
use georoute_osrm::OsrmClient;
use std::sync::Arc;

use crate::config::Config;
use crate::resolver::RouteResolver;

pub struct AppState {
    resolver: RouteResolver<OsrmClient>,
    config: Config,
}

impl AppState {
    /// Build the seed graph and the OSRM client. Graph defects abort startup.
    pub fn new(config: Config) -> Result<Self> {
        let graph = GraphStore::seed().context("seed graph is inconsistent")?;
        tracing::info!(nodes = graph.len(), "Internal graph ready");
        let osrm = OsrmClient::new(config.osrm_base_url.clone(), config.osrm_timeout())?;
        let resolver = RouteResolver::new(osrm, Arc::new(graph), config.provider_budget());
        Ok(Self { resolver, config })
    }

    pub fn resolver(&self) -> &RouteResolver<OsrmClient> {
        &self.resolver
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
