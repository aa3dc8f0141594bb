//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use giftbox_core::models;

/// The OpenAPI document served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Giftbox Customizer API",
        version = "0.1.0",
        description = "Asset catalog, preview generation and logo upload for the corporate gift-box customizer."
    ),
    paths(
        handlers::assets::list_assets,
        handlers::assets::get_combo_asset,
        handlers::preview::customize_preview,
        handlers::logo_upload::upload_logo,
        health::health_check,
    ),
    components(schemas(
        giftbox_core::ComboKey,
        models::AssetStatus,
        models::ComboAsset,
        models::FallbackAssets,
        models::AssetsResponse,
        models::PreviewRequest,
        models::PreviewResult,
        models::ProductInfo,
        models::CustomizationEcho,
        models::LogoUploadResponse,
        health::HealthResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "assets", description = "Combo imagery from the asset catalog"),
        (name = "preview", description = "Preview generation for a color combination"),
        (name = "logo", description = "Logo upload and hosting"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
