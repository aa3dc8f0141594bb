//! Preview generation webhook.

use std::sync::Arc;

use axum::{extract::State, Json};
use giftbox_core::{PreviewRequest, PreviewResult};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/webhook/customize-preview",
    tag = "preview",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Preview images for the selected combination", body = PreviewResult),
        (status = 400, description = "Missing company name or color selection", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(
        box_color = %request.box_color,
        foil_color = %request.foil_color,
        ribbon_color = %request.ribbon_color,
    )
)]
pub async fn customize_preview(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<PreviewRequest>,
) -> Result<Json<PreviewResult>, HttpAppError> {
    let result = state.resolver.resolve_preview(&request).await?;

    tracing::info!(
        session_id = %result.session_id,
        combo = %result.product.combo,
        images = result.preview_images.len(),
        with_logo = request.logo_url().is_some(),
        "Preview generated"
    );

    Ok(Json(result))
}
