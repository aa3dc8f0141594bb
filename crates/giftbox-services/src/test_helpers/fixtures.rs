//! Catalog row fixtures

use crate::catalog::{CatalogFields, CatalogRecord};

/// A ready row for `combo_key` whose images fill hero, then angles 02..09, in order.
pub fn record_with_images(combo_key: &str, images: &[&str]) -> CatalogRecord {
    let mut slots = images.iter().map(|url| Some(url.to_string()));
    let mut next = || slots.next().flatten();

    let fields = CatalogFields {
        combo_key: Some(combo_key.to_string()),
        product_sku: Some("TC-VEG-009".to_string()),
        status: Some("Ready".to_string()),
        hero_image_url: next(),
        angle_02_url: next(),
        angle_03_url: next(),
        angle_04_url: next(),
        angle_05_url: next(),
        angle_06_url: next(),
        angle_07_url: next(),
        angle_08_url: next(),
        angle_09_url: next(),
        video_url: None,
    };

    CatalogRecord {
        id: format!("rec_{}", combo_key),
        fields,
    }
}

/// A ready row with a hero image and an orbit video.
pub fn record_with_video(combo_key: &str, hero: &str, video: &str) -> CatalogRecord {
    let mut record = record_with_images(combo_key, &[hero]);
    record.fields.video_url = Some(video.to_string());
    record
}
