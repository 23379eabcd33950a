//! Medboard API Server
//!
//! Run with: cargo run --bin medboard-api
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `config.rs` for the search paths) with
//! environment variable overrides:
//! - `MEDBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `MEDBOARD_API_PORT`: Port to listen on (default: 8086)
//! - `MEDBOARD_SEED`: Load sample data at startup (default: true)
//! - `MEDBOARD_LOG_LEVEL`: Log level (default: info)
//! - `MEDBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter override

use medboard::api::{serve, ApiConfig, AppState};
use medboard::config::Config;
use medboard::registry::Registry;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Medboard API server v{}", env!("CARGO_PKG_VERSION"));

    // Build the in-memory registry; every restart begins from scratch
    let registry = if config.seed.enabled {
        let registry = Registry::seeded().await?;
        let stats = registry.stats().await;
        tracing::info!("Registry seeded: {}", stats);
        registry
    } else {
        tracing::info!("Seeding disabled, starting with an empty registry");
        Registry::new()
    };

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
        ..Default::default()
    };

    let state = AppState::new(Arc::new(registry), api_config.clone());

    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Medboard API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("medboard={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
