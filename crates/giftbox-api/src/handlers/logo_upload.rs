//! Logo upload handler.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use giftbox_core::{AppError, LogoUploadResponse};
use giftbox_services::{upload_session_id, LogoFile};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_logo_form;

#[utoipa::path(
    post,
    path = "/api/upload-logo",
    tag = "logo",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Fields: logo (file), company_name, email (optional)"),
    responses(
        (status = 200, description = "Logo stored", body = LogoUploadResponse),
        (status = 400, description = "Logo file or company name missing", body = ErrorResponse),
        (status = 413, description = "Logo too large", body = ErrorResponse),
        (status = 500, description = "Image host rejected the upload", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(backend = state.logo_host.backend_name()))]
pub async fn upload_logo(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<LogoUploadResponse>, HttpAppError> {
    let form = extract_logo_form(multipart, state.config.logo_max_size_bytes()).await?;

    let logo = form
        .logo
        .ok_or_else(|| AppError::Validation("No logo file provided".to_string()))?;
    let company_name = form
        .company_name
        .ok_or_else(|| AppError::Validation("Company name is required".to_string()))?;

    let file = LogoFile {
        data: logo.data,
        content_type: logo.content_type,
        company_name: company_name.clone(),
    };
    let logo_url = state.logo_host.upload(&file).await?;
    let session_id = upload_session_id(state.clock.now());

    tracing::info!(
        session_id = %session_id,
        file_name = ?logo.file_name,
        size_bytes = file.data.len(),
        "Logo uploaded"
    );

    Ok(Json(LogoUploadResponse {
        session_id,
        logo_url,
        company_name,
        email: form.email.unwrap_or_default(),
    }))
}
