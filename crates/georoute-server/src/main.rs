//! georoute server - resolves routes via OSRM with an internal-graph fallback

use anyhow::Result;
use georoute_server::api;
use georoute_server::config::{Config, LogFormat};
use georoute_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("georoute_server=debug".parse()?);
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_format)?;

    tracing::info!("Starting georoute server...");

    let port = config.server_port;
    let state = Arc::new(AppState::new(config)?);
    tracing::info!(
        osrm = %state.config().osrm_base_url,
        budget_ms = state.config().provider_budget_ms,
        "Using external routing provider"
    );
    let app = api::routes().with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
