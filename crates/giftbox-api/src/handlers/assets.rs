//! Asset catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use giftbox_core::{AssetsResponse, ComboAsset, ComboKey};

use crate::state::AppState;

/// Full asset catalog for the configured product.
///
/// Never fails: when the catalog is unconfigured or unreachable the combo map is empty and
/// the client renders the fallback imagery.
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = "assets",
    responses(
        (status = 200, description = "Combo assets keyed by combo key, plus generic fallback imagery", body = AssetsResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> Json<AssetsResponse> {
    let response = state.resolver.catalog_view().await;
    tracing::debug!(combos = response.combos.len(), "Serving asset catalog");
    Json(response)
}

/// Asset for a single combo key. Unknown keys resolve to a queued asset over the fallback
/// imagery.
#[utoipa::path(
    get,
    path = "/api/assets/{combo_key}",
    tag = "assets",
    params(
        ("combo_key" = String, Path, description = "Normalized combo key, e.g. pure-black_gold_vosges-purple")
    ),
    responses(
        (status = 200, description = "Asset for the combo", body = ComboAsset)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_combo_asset(
    State(state): State<Arc<AppState>>,
    Path(combo_key): Path<String>,
) -> Json<ComboAsset> {
    Json(
        state
            .resolver
            .resolve_by_key(&ComboKey::from_raw(combo_key))
            .await,
    )
}
