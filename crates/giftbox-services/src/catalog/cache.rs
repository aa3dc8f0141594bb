//! Time-boxed memoization of the full catalog.
//!
//! The cache is owned by the service state rather than living in a global. Refresh is lazy
//! and happens inline in whichever request first observes an expired snapshot; two requests
//! racing past expiry may both refresh, and the later write wins.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use giftbox_core::CatalogSnapshot;
use tokio::sync::RwLock;

use super::{AssetCatalog, CatalogFilter, CatalogResult};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct CatalogCache {
    catalog: Option<Arc<dyn AssetCatalog>>,
    product_sku: String,
    fallback_images: Vec<String>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogCache {
    /// `catalog = None` means no credentials are configured: every call yields an empty
    /// snapshot without touching the network.
    pub fn new(
        catalog: Option<Arc<dyn AssetCatalog>>,
        product_sku: impl Into<String>,
        fallback_images: Vec<String>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            product_sku: product_sku.into(),
            fallback_images,
            ttl,
            clock,
            snapshot: RwLock::new(None),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot, refreshed from the catalog when older than the TTL.
    ///
    /// A failed refresh returns the error and keeps the stale snapshot in place; it is not
    /// served again until a refresh succeeds.
    pub async fn get_snapshot(&self) -> CatalogResult<Arc<CatalogSnapshot>> {
        let catalog = match &self.catalog {
            Some(catalog) => catalog,
            None => {
                return Ok(Arc::new(CatalogSnapshot::empty(
                    self.fallback_images.clone(),
                    self.clock.now(),
                )))
            }
        };

        let now = self.clock.now();
        if let Some(snapshot) = self.snapshot.read().await.as_ref() {
            if self.is_fresh(snapshot, now) {
                return Ok(Arc::clone(snapshot));
            }
        }

        tracing::debug!(
            backend = catalog.backend_name(),
            sku = %self.product_sku,
            "Refreshing catalog snapshot"
        );
        let records = catalog
            .query(&CatalogFilter::all_ready(self.product_sku.clone()))
            .await?;

        let mut combos = HashMap::with_capacity(records.len());
        for record in &records {
            if let Some(asset) = record.to_asset(&self.fallback_images) {
                combos.insert(asset.combo_key.clone(), asset);
            }
        }

        let snapshot = Arc::new(CatalogSnapshot {
            combos,
            fallback_images: self.fallback_images.clone(),
            fetched_at: self.clock.now(),
        });
        *self.snapshot.write().await = Some(Arc::clone(&snapshot));

        tracing::info!(
            rows = records.len(),
            combos = snapshot.combos.len(),
            "Catalog snapshot refreshed"
        );
        Ok(snapshot)
    }

    fn is_fresh(&self, snapshot: &CatalogSnapshot, now: DateTime<Utc>) -> bool {
        match (now - snapshot.fetched_at).to_std() {
            Ok(elapsed) => elapsed < self.ttl,
            // fetched_at in the future: the clock moved backwards
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{record_with_images, FailingCatalog, ManualClock, StaticCatalog};
    use giftbox_core::{build_combo_key, AssetStatus};

    const TTL: Duration = Duration::from_secs(300);

    fn fallback() -> Vec<String> {
        vec!["https://img/fallback.jpg".to_string()]
    }

    #[tokio::test]
    async fn test_snapshot_reused_within_ttl() {
        let catalog = Arc::new(StaticCatalog::new(vec![record_with_images(
            "pure-black_gold_black",
            &["https://img/hero.jpg"],
        )]));
        let clock = Arc::new(ManualClock::default());
        let cache = CatalogCache::new(
            Some(catalog.clone() as Arc<dyn AssetCatalog>),
            "TC-VEG-009",
            fallback(),
            TTL,
            clock.clone(),
        );

        let first = cache.get_snapshot().await.unwrap();
        clock.advance(Duration::from_secs(299));
        let second = cache.get_snapshot().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(catalog.call_count(), 1);
        assert_eq!(
            catalog.filters()[0],
            CatalogFilter::all_ready("TC-VEG-009")
        );
    }

    #[tokio::test]
    async fn test_snapshot_refreshed_after_ttl() {
        let catalog = Arc::new(StaticCatalog::new(vec![]));
        let clock = Arc::new(ManualClock::default());
        let cache = CatalogCache::new(
            Some(catalog.clone() as Arc<dyn AssetCatalog>),
            "TC-VEG-009",
            fallback(),
            TTL,
            clock.clone(),
        );

        let first = cache.get_snapshot().await.unwrap();
        clock.advance(TTL);
        let second = cache.get_snapshot().await.unwrap();
        let third = cache.get_snapshot().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &third));
        assert_eq!(catalog.call_count(), 2);
        assert_eq!(second.fetched_at, clock.now());
    }

    #[tokio::test]
    async fn test_unconfigured_catalog_is_empty_snapshot() {
        let cache = CatalogCache::new(
            None,
            "TC-VEG-009",
            fallback(),
            TTL,
            Arc::new(ManualClock::default()),
        );
        let snapshot = cache.get_snapshot().await.unwrap();
        assert!(snapshot.combos.is_empty());
        assert_eq!(snapshot.fallback_images, fallback());
        assert!(!cache.is_configured());
    }

    #[tokio::test]
    async fn test_refresh_failure_propagates() {
        let catalog = Arc::new(FailingCatalog::new());
        let cache = CatalogCache::new(
            Some(catalog.clone() as Arc<dyn AssetCatalog>),
            "TC-VEG-009",
            fallback(),
            TTL,
            Arc::new(ManualClock::default()),
        );
        assert!(cache.get_snapshot().await.is_err());
        assert!(cache.get_snapshot().await.is_err());
        assert_eq!(catalog.call_count(), 2);
    }

    #[tokio::test]
    async fn test_later_duplicate_rows_overwrite_earlier() {
        let catalog = Arc::new(StaticCatalog::new(vec![
            record_with_images("pure-black_gold_black", &["https://img/old.jpg"]),
            record_with_images("pure-black_gold_black", &["https://img/new.jpg"]),
        ]));
        let cache = CatalogCache::new(
            Some(catalog as Arc<dyn AssetCatalog>),
            "TC-VEG-009",
            fallback(),
            TTL,
            Arc::new(ManualClock::default()),
        );
        let snapshot = cache.get_snapshot().await.unwrap();
        let asset = snapshot.resolve(&build_combo_key("Pure Black", "Gold", "Black"));
        assert_eq!(asset.images, vec!["https://img/new.jpg".to_string()]);
        assert_eq!(asset.status, AssetStatus::Ready);
    }
}
