//! Domain methods for the Giftbox API client.
//!
//! Request and response bodies are the `giftbox_core::models` types the server uses.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use giftbox_core::{
    AssetsResponse, ComboAsset, ComboKey, LogoUploadResponse, PreviewRequest, PreviewResult,
};

use crate::ApiClient;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// A logo file to upload along with the customer's details.
#[derive(Debug, Clone)]
pub struct LogoUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
    pub company_name: String,
    pub email: Option<String>,
}

impl LogoUpload {
    fn into_form(self) -> Result<reqwest::multipart::Form> {
        let part = reqwest::multipart::Part::bytes(self.data)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .with_context(|| format!("Invalid logo MIME type: {}", self.mime_type))?;

        let mut form = reqwest::multipart::Form::new()
            .part("logo", part)
            .text("company_name", self.company_name);
        if let Some(email) = self.email {
            form = form.text("email", email);
        }
        Ok(form)
    }
}

impl ApiClient {
    /// Whole asset catalog: combos keyed by combo key plus the fallback imagery.
    pub async fn fetch_assets(&self) -> Result<AssetsResponse> {
        self.get("/api/assets").await
    }

    /// Asset for one combo. Unknown combos come back queued over the fallback imagery.
    pub async fn fetch_combo(&self, key: &ComboKey) -> Result<ComboAsset> {
        self.get(&format!("/api/assets/{}", key)).await
    }

    pub async fn generate_preview(&self, request: &PreviewRequest) -> Result<PreviewResult> {
        self.post_json("/webhook/customize-preview", request).await
    }

    pub async fn upload_logo(&self, upload: LogoUpload) -> Result<LogoUploadResponse> {
        let form = upload.into_form()?;
        self.post_multipart("/api/upload-logo", form).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }
}
