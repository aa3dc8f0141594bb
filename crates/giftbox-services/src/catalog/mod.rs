//! Asset catalog: query client, row mapping and snapshot cache.

pub mod airtable;
pub mod cache;
pub mod error;
pub mod filter;
pub mod record;
pub mod traits;

use std::sync::Arc;
use std::time::Duration;

use giftbox_core::Config;

pub use airtable::{AirtableCatalog, AirtableSettings};
pub use cache::{CatalogCache, Clock, SystemClock};
pub use error::{CatalogError, CatalogResult};
pub use filter::{escape_formula_value, CatalogFilter};
pub use record::{CatalogFields, CatalogRecord};
pub use traits::AssetCatalog;

/// Build the catalog client from configuration. `Ok(None)` when no API key is set.
pub fn create_catalog(config: &Config) -> CatalogResult<Option<Arc<dyn AssetCatalog>>> {
    let api_key = match config.airtable_api_key() {
        Some(key) => key.to_string(),
        None => return Ok(None),
    };

    let catalog = AirtableCatalog::new(AirtableSettings {
        api_url: config.airtable_api_url().to_string(),
        api_key,
        base_id: config.airtable_base_id().to_string(),
        table: config.airtable_table().to_string(),
        timeout: Duration::from_secs(config.catalog_timeout_secs()),
        max_pages: config.catalog_max_pages(),
    })?;
    Ok(Some(Arc::new(catalog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftbox_core::CustomizerConfig;

    #[test]
    fn test_no_api_key_means_unconfigured() {
        let catalog = create_catalog(&Config::default()).unwrap();
        assert!(catalog.is_none());
    }

    #[test]
    fn test_api_key_builds_airtable_client() {
        let config = Config(Box::new(CustomizerConfig {
            airtable_api_key: Some("patTEST".to_string()),
            ..Default::default()
        }));
        let catalog = create_catalog(&config).unwrap().unwrap();
        assert_eq!(catalog.backend_name(), "airtable");
    }
}
