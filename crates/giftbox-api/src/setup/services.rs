//! Service wiring: catalog client, logo host and resolver.

use std::sync::Arc;

use anyhow::{Context, Result};
use giftbox_core::Config;
use giftbox_services::{create_catalog, create_logo_host, SystemClock};

use crate::state::AppState;

/// Build the application state from configuration.
pub fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let catalog = create_catalog(config).context("Failed to create catalog client")?;
    let logo_host = create_logo_host(config).context("Failed to create logo host")?;

    tracing::info!(
        catalog = catalog.as_ref().map(|c| c.backend_name()).unwrap_or("none"),
        logo_host = logo_host.backend_name(),
        product_sku = config.product_sku(),
        cache_ttl_secs = config.catalog_cache_ttl_secs(),
        "Services initialized"
    );

    Ok(Arc::new(AppState::new(
        config.clone(),
        catalog,
        logo_host,
        Arc::new(SystemClock),
    )))
}
