//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod services;
pub mod validation;

use std::sync::Arc;

use anyhow::{Context, Result};
use giftbox_core::Config;

use crate::state::AppState;

/// Validate configuration, start tracing, build the services and the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    giftbox_infra::init_telemetry("giftbox-api", config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    validation::validate_config(&config).context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    let state = services::initialize_services(&config)?;

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
