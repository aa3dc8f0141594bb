//! Preview webhook integration tests.
//!
//! Run with: `cargo test -p giftbox-api --test preview_test`

mod helpers;

use std::sync::Arc;

use giftbox_api::error::ErrorResponse;
use giftbox_core::constants::{default_preview_images, DEFAULT_PRODUCT_NAME, DEFAULT_PRODUCT_SKU};
use giftbox_core::PreviewResult;
use giftbox_services::resolver::{PREVIEW_MESSAGE_STANDARD, PREVIEW_MESSAGE_WITH_LOGO};
use giftbox_services::test_helpers::{record_with_images, FailingCatalog, StaticCatalog};
use helpers::fixtures::preview_body;
use helpers::{setup_test_app, TestAppBuilder};
use serde_json::json;

const PATH: &str = "/webhook/customize-preview";

#[tokio::test]
async fn test_preview_with_unconfigured_catalog_uses_defaults() {
    let app = setup_test_app();

    let response = app.client().post(PATH).json(&preview_body("Acme Corp")).await;
    response.assert_status_ok();

    let body: PreviewResult = response.json();
    assert!(body.success);
    assert_eq!(body.company_name, "Acme Corp");
    assert_eq!(body.product.combo, "pure-black_gold_vosges-purple");
    assert_eq!(body.product.sku, DEFAULT_PRODUCT_SKU);
    assert_eq!(body.product.name, DEFAULT_PRODUCT_NAME);
    assert_eq!(body.preview_images, default_preview_images());
    assert_eq!(body.message, PREVIEW_MESSAGE_STANDARD);
    assert!(body.session_id.starts_with("prev_"));
}

#[tokio::test]
async fn test_preview_echoes_customization() {
    let app = setup_test_app();

    let response = app.client().post(PATH).json(&preview_body("Acme Corp")).await;
    let body: serde_json::Value = response.json();

    let customization = &body["customization"];
    assert_eq!(customization["box_color"], "Pure Black");
    assert_eq!(customization["quantity"], "250");
    assert_eq!(customization["level"], "duet");
    assert_eq!(customization["message"], "Happy holidays");
    assert_eq!(customization["logo_url"], "");
}

#[tokio::test]
async fn test_preview_uses_hero_angle_02_and_05_from_catalog() {
    let catalog = Arc::new(StaticCatalog::new(vec![record_with_images(
        "pure-black_gold_vosges-purple",
        &[
            "https://img/hero.jpg",
            "https://img/02.jpg",
            "https://img/03.jpg",
            "https://img/04.jpg",
            "https://img/05.jpg",
        ],
    )]));
    let app = TestAppBuilder::default().catalog(catalog.clone()).build();

    let mut request = preview_body("Acme Corp");
    request["logo_url"] = json!("https://i.ibb.co/test/acme_logo.png");

    let body: PreviewResult = app.client().post(PATH).json(&request).await.json();
    assert_eq!(
        body.preview_images,
        vec![
            "https://img/hero.jpg".to_string(),
            "https://img/02.jpg".to_string(),
            "https://img/05.jpg".to_string(),
        ]
    );
    assert_eq!(body.message, PREVIEW_MESSAGE_WITH_LOGO);

    let filters = catalog.filters();
    assert_eq!(filters.len(), 1);
    assert_eq!(
        filters[0].combo_key.as_ref().map(|k| k.as_str()),
        Some("pure-black_gold_vosges-purple")
    );
}

#[tokio::test]
async fn test_preview_with_unreachable_catalog_still_succeeds() {
    let app = TestAppBuilder::default()
        .catalog(Arc::new(FailingCatalog::new()))
        .build();

    let response = app.client().post(PATH).json(&preview_body("Acme Corp")).await;
    response.assert_status_ok();

    let body: PreviewResult = response.json();
    assert!(body.success);
    assert_eq!(body.preview_images, default_preview_images());
}

#[tokio::test]
async fn test_preview_requires_company_name() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(PATH)
        .json(&preview_body("   "))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "Company name required");
    assert_eq!(body.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_preview_requires_all_colors() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(PATH)
        .json(&json!({ "company_name": "Acme Corp", "box_color": "Pure Black", "foil_color": "Gold" }))
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: ErrorResponse = response.json();
    assert_eq!(body.error, "Color selections required");
}

#[tokio::test]
async fn test_malformed_json_is_400_envelope() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(PATH)
        .text("{ not json")
        .content_type("application/json")
        .expect_failure()
        .await;
    assert_eq!(response.status_code(), 400);

    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "INVALID_INPUT");
}
