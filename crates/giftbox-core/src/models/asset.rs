use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::combo_key::ComboKey;

/// Availability of per-combo renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Per-combo renders exist.
    Ready,
    /// Generic imagery is shown until renders are generated.
    Queued,
}

impl AssetStatus {
    /// Parse a catalog `Status` value. `Ready` (any case) is ready, anything else queued.
    pub fn from_catalog(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("ready") {
            AssetStatus::Ready
        } else {
            AssetStatus::Queued
        }
    }
}

/// Visual assets for one color combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComboAsset {
    pub combo_key: ComboKey,
    pub status: AssetStatus,
    /// Image URLs, hero first. Never empty for a `Ready` asset.
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl ComboAsset {
    /// Asset for a combo without renders: generic images, `Queued` status.
    pub fn queued(combo_key: ComboKey, fallback_images: Vec<String>) -> Self {
        Self {
            combo_key,
            status: AssetStatus::Queued,
            images: fallback_images,
            video_url: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == AssetStatus::Ready
    }

    pub fn hero_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// One successful read of the asset catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub combos: HashMap<ComboKey, ComboAsset>,
    pub fallback_images: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Snapshot with no combos, used when the catalog is unconfigured or unreachable.
    pub fn empty(fallback_images: Vec<String>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            combos: HashMap::new(),
            fallback_images,
            fetched_at,
        }
    }

    /// Asset for `key`, or a queued asset over the fallback images.
    pub fn resolve(&self, key: &ComboKey) -> ComboAsset {
        self.combos
            .get(key)
            .cloned()
            .unwrap_or_else(|| ComboAsset::queued(key.clone(), self.fallback_images.clone()))
    }

    pub fn to_response(&self) -> AssetsResponse {
        AssetsResponse {
            combos: self.combos.clone(),
            fallback: FallbackAssets {
                images: self.fallback_images.clone(),
            },
        }
    }
}

/// Generic imagery block of the assets response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FallbackAssets {
    pub images: Vec<String>,
}

/// Response body of `GET /api/assets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetsResponse {
    #[schema(value_type = HashMap<String, ComboAsset>)]
    pub combos: HashMap<ComboKey, ComboAsset>,
    pub fallback: FallbackAssets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo_key::build_combo_key;

    #[test]
    fn test_status_from_catalog() {
        assert_eq!(AssetStatus::from_catalog("Ready"), AssetStatus::Ready);
        assert_eq!(AssetStatus::from_catalog(" ready "), AssetStatus::Ready);
        assert_eq!(AssetStatus::from_catalog("Queued"), AssetStatus::Queued);
        assert_eq!(AssetStatus::from_catalog("In Progress"), AssetStatus::Queued);
    }

    #[test]
    fn test_combo_asset_wire_shape() {
        let asset = ComboAsset {
            combo_key: build_combo_key("Pure Black", "Gold", "Black"),
            status: AssetStatus::Ready,
            images: vec!["https://img/hero.jpg".to_string()],
            video_url: None,
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["comboKey"], "pure-black_gold_black");
        assert_eq!(json["status"], "ready");
        assert!(json.get("videoUrl").is_none());

        let with_video: ComboAsset = serde_json::from_value(serde_json::json!({
            "comboKey": "navy-blue_gold_vosges-purple",
            "status": "queued",
            "images": [],
            "videoUrl": "https://img/orbit.mp4"
        }))
        .unwrap();
        assert_eq!(with_video.video_url.as_deref(), Some("https://img/orbit.mp4"));
        assert!(!with_video.is_ready());
    }

    #[test]
    fn test_snapshot_resolve_miss_is_queued_fallback() {
        let snapshot = CatalogSnapshot::empty(vec!["a".into(), "b".into()], Utc::now());
        let key = build_combo_key("True Blue", "Silver", "White");
        let asset = snapshot.resolve(&key);
        assert_eq!(asset.combo_key, key);
        assert_eq!(asset.status, AssetStatus::Queued);
        assert_eq!(asset.images, vec!["a".to_string(), "b".to_string()]);
    }
}
