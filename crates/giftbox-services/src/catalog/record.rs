//! Catalog rows and their mapping into [`ComboAsset`]s.

use giftbox_core::{AssetStatus, ComboAsset, ComboKey};
use serde::{Deserialize, Serialize};

/// One row of the asset library table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fields: CatalogFields,
}

/// Columns of the asset library table. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFields {
    #[serde(rename = "Combo_Key", default, skip_serializing_if = "Option::is_none")]
    pub combo_key: Option<String>,
    #[serde(rename = "Product_SKU", default, skip_serializing_if = "Option::is_none")]
    pub product_sku: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Hero_Image_URL", default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(rename = "Angle_02_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_02_url: Option<String>,
    #[serde(rename = "Angle_03_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_03_url: Option<String>,
    #[serde(rename = "Angle_04_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_04_url: Option<String>,
    #[serde(rename = "Angle_05_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_05_url: Option<String>,
    #[serde(rename = "Angle_06_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_06_url: Option<String>,
    #[serde(rename = "Angle_07_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_07_url: Option<String>,
    #[serde(rename = "Angle_08_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_08_url: Option<String>,
    #[serde(rename = "Angle_09_URL", default, skip_serializing_if = "Option::is_none")]
    pub angle_09_url: Option<String>,
    #[serde(rename = "Video_URL", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl CatalogFields {
    pub fn combo_key(&self) -> Option<ComboKey> {
        present(&self.combo_key).map(ComboKey::from_raw)
    }

    /// Hero first, then angles 02 through 09, skipping blanks.
    pub fn image_urls(&self) -> Vec<String> {
        [
            &self.hero_image_url,
            &self.angle_02_url,
            &self.angle_03_url,
            &self.angle_04_url,
            &self.angle_05_url,
            &self.angle_06_url,
            &self.angle_07_url,
            &self.angle_08_url,
            &self.angle_09_url,
        ]
        .into_iter()
        .filter_map(present)
        .map(str::to_string)
        .collect()
    }

    /// The three key angles shown by a preview: hero, angle 02, angle 05.
    pub fn preview_image_urls(&self) -> Vec<String> {
        [&self.hero_image_url, &self.angle_02_url, &self.angle_05_url]
            .into_iter()
            .filter_map(present)
            .map(str::to_string)
            .collect()
    }

    pub fn video_url(&self) -> Option<String> {
        present(&self.video_url).map(str::to_string)
    }

    /// Absent status counts as ready; snapshot queries already filter on it.
    pub fn status(&self) -> AssetStatus {
        present(&self.status)
            .map(AssetStatus::from_catalog)
            .unwrap_or(AssetStatus::Ready)
    }
}

impl CatalogRecord {
    /// Map a row into an asset. Rows without a combo key contribute nothing.
    ///
    /// A row without any image is reported as queued over `fallback_images`, so a ready
    /// asset always has at least one image.
    pub fn to_asset(&self, fallback_images: &[String]) -> Option<ComboAsset> {
        let combo_key = self.fields.combo_key()?;
        let images = self.fields.image_urls();
        if images.is_empty() {
            let mut asset = ComboAsset::queued(combo_key, fallback_images.to_vec());
            asset.video_url = self.fields.video_url();
            return Some(asset);
        }
        Some(ComboAsset {
            combo_key,
            status: self.fields.status(),
            images,
            video_url: self.fields.video_url(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> CatalogRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_images_in_fixed_order() {
        let row = record(serde_json::json!({
            "id": "rec1",
            "fields": {
                "Combo_Key": "pure-black_gold_black",
                "Angle_09_URL": "https://img/9.jpg",
                "Hero_Image_URL": "https://img/hero.jpg",
                "Angle_03_URL": "https://img/3.jpg",
                "Video_URL": "https://img/orbit.mp4"
            }
        }));
        let asset = row.to_asset(&[]).unwrap();
        assert_eq!(
            asset.images,
            vec!["https://img/hero.jpg", "https://img/3.jpg", "https://img/9.jpg"]
        );
        assert_eq!(asset.status, AssetStatus::Ready);
        assert_eq!(asset.video_url.as_deref(), Some("https://img/orbit.mp4"));
    }

    #[test]
    fn test_hero_and_angle_05_only() {
        let row = record(serde_json::json!({
            "fields": {
                "Combo_Key": "navy-blue_silver_white",
                "Hero_Image_URL": "https://img/hero.jpg",
                "Angle_05_URL": "https://img/5.jpg"
            }
        }));
        assert_eq!(
            row.to_asset(&[]).unwrap().images,
            vec!["https://img/hero.jpg", "https://img/5.jpg"]
        );
        assert_eq!(
            row.fields.preview_image_urls(),
            vec!["https://img/hero.jpg", "https://img/5.jpg"]
        );
    }

    #[test]
    fn test_row_without_key_is_skipped() {
        let row = record(serde_json::json!({
            "fields": { "Combo_Key": "", "Hero_Image_URL": "https://img/hero.jpg" }
        }));
        assert!(row.to_asset(&[]).is_none());
        assert!(CatalogRecord::default().to_asset(&[]).is_none());
    }

    #[test]
    fn test_empty_strings_are_skipped() {
        let row = record(serde_json::json!({
            "fields": {
                "Combo_Key": "pure-white_gold_vosges-purple",
                "Hero_Image_URL": "https://img/hero.jpg",
                "Angle_02_URL": "",
                "Video_URL": ""
            }
        }));
        let asset = row.to_asset(&[]).unwrap();
        assert_eq!(asset.images, vec!["https://img/hero.jpg"]);
        assert_eq!(asset.video_url, None);
    }

    #[test]
    fn test_row_without_images_is_queued_fallback() {
        let row = record(serde_json::json!({
            "fields": { "Combo_Key": "forest-green_gold_black", "Status": "Ready" }
        }));
        let fallback = vec!["https://img/default.jpg".to_string()];
        let asset = row.to_asset(&fallback).unwrap();
        assert_eq!(asset.status, AssetStatus::Queued);
        assert_eq!(asset.images, fallback);
    }

    #[test]
    fn test_status_column() {
        let row = record(serde_json::json!({
            "fields": {
                "Combo_Key": "charcoal-grey_silver_white",
                "Status": "Queued",
                "Hero_Image_URL": "https://img/hero.jpg"
            }
        }));
        assert_eq!(row.to_asset(&[]).unwrap().status, AssetStatus::Queued);
    }
}
