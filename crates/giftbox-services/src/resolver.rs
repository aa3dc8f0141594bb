//! Asset resolution: combo key to imagery, with graceful degradation.
//!
//! Catalog failures never reach callers of this module. A failed or empty lookup falls back
//! to the generic product imagery and the failure is logged.

use std::sync::Arc;
use std::time::Duration;

use giftbox_core::constants::{default_images, default_preview_images};
use giftbox_core::{
    build_combo_key, AppError, AssetsResponse, CatalogSnapshot, ComboAsset, ComboKey,
    CustomizationEcho, PreviewRequest, PreviewResult, ProductInfo,
};

use crate::catalog::{AssetCatalog, CatalogCache, CatalogFilter, Clock};
use crate::session::preview_session_id;

pub const PREVIEW_MESSAGE_WITH_LOGO: &str =
    "Preview generated with your logo composited onto 3 key angles.";
pub const PREVIEW_MESSAGE_STANDARD: &str = "Preview generated with standard product imagery.";

/// Product the customizer sells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSettings {
    pub sku: String,
    pub name: String,
}

pub struct AssetResolver {
    catalog: Option<Arc<dyn AssetCatalog>>,
    cache: CatalogCache,
    product: ProductSettings,
    clock: Arc<dyn Clock>,
}

impl AssetResolver {
    pub fn new(
        catalog: Option<Arc<dyn AssetCatalog>>,
        product: ProductSettings,
        cache_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cache = CatalogCache::new(
            catalog.clone(),
            product.sku.clone(),
            default_images(),
            cache_ttl,
            Arc::clone(&clock),
        );
        Self {
            catalog,
            cache,
            product,
            clock,
        }
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    pub fn product(&self) -> &ProductSettings {
        &self.product
    }

    /// Asset for `key`. A catalog failure is treated like a miss against the default images.
    #[tracing::instrument(skip(self, key), fields(combo_key = %key))]
    pub async fn resolve_by_key(&self, key: &ComboKey) -> ComboAsset {
        match self.cache.get_snapshot().await {
            Ok(snapshot) => snapshot.resolve(key),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, serving fallback imagery");
                ComboAsset::queued(key.clone(), default_images())
            }
        }
    }

    /// Whole-catalog view for `GET /api/assets`. Degrades to an empty catalog on failure.
    pub async fn catalog_view(&self) -> AssetsResponse {
        match self.cache.get_snapshot().await {
            Ok(snapshot) => snapshot.to_response(),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, serving empty asset map");
                CatalogSnapshot::empty(default_images(), self.clock.now()).to_response()
            }
        }
    }

    /// Validate a preview request and pick the images for it.
    #[tracing::instrument(skip(self, request), fields(company = %request.company_name))]
    pub async fn resolve_preview(&self, request: &PreviewRequest) -> Result<PreviewResult, AppError> {
        if request.company_name.trim().is_empty() {
            return Err(AppError::Validation("Company name required".to_string()));
        }
        if [&request.box_color, &request.foil_color, &request.ribbon_color]
            .iter()
            .any(|color| color.trim().is_empty())
        {
            return Err(AppError::Validation(
                "Color selections required".to_string(),
            ));
        }

        let combo_key = build_combo_key(
            &request.box_color,
            &request.foil_color,
            &request.ribbon_color,
        );
        let preview_images = self.preview_images(&combo_key).await;

        let message = if request.logo_url().is_some() {
            PREVIEW_MESSAGE_WITH_LOGO
        } else {
            PREVIEW_MESSAGE_STANDARD
        };

        Ok(PreviewResult {
            success: true,
            preview_images,
            session_id: preview_session_id(self.clock.now()),
            company_name: request.company_name.clone(),
            product: ProductInfo {
                sku: self.product.sku.clone(),
                name: self.product.name.clone(),
                combo: combo_key.into_string(),
            },
            customization: CustomizationEcho::from_request(request),
            message: message.to_string(),
        })
    }

    /// Hero, angle 02 and angle 05 of the first matching row, or the canned defaults.
    async fn preview_images(&self, combo_key: &ComboKey) -> Vec<String> {
        let Some(catalog) = &self.catalog else {
            return default_preview_images();
        };

        let filter = CatalogFilter::for_combo(self.product.sku.clone(), combo_key.clone());
        match catalog.query(&filter).await {
            Ok(records) => {
                let images = records
                    .first()
                    .map(|record| record.fields.preview_image_urls())
                    .unwrap_or_default();
                if images.is_empty() {
                    tracing::debug!(combo_key = %combo_key, "No renders for combo, using defaults");
                    default_preview_images()
                } else {
                    images
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, combo_key = %combo_key, "Catalog lookup failed, using default preview");
                default_preview_images()
            }
        }
    }
}
