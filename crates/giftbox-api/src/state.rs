//! Application state shared by all handlers.

use std::sync::Arc;
use std::time::Duration;

use giftbox_core::Config;
use giftbox_services::{AssetCatalog, AssetResolver, Clock, LogoHost, ProductSettings};

pub struct AppState {
    pub config: Config,
    pub resolver: Arc<AssetResolver>,
    pub logo_host: Arc<dyn LogoHost>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wire the resolver (and its catalog cache) from configuration and the given backends.
    /// `catalog = None` runs the service on the generic imagery only.
    pub fn new(
        config: Config,
        catalog: Option<Arc<dyn AssetCatalog>>,
        logo_host: Arc<dyn LogoHost>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let product = ProductSettings {
            sku: config.product_sku().to_string(),
            name: config.product_name().to_string(),
        };
        let resolver = AssetResolver::new(
            catalog,
            product,
            Duration::from_secs(config.catalog_cache_ttl_secs()),
            Arc::clone(&clock),
        );

        Self {
            config,
            resolver: Arc::new(resolver),
            logo_host,
            clock,
        }
    }
}
