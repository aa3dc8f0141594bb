//! HTTP client for the Giftbox customizer API.
//!
//! [`ApiClient`] wraps the four endpoints the storefront calls. [`AssetStore`] keeps the
//! combo imagery the customizer renders, starting from a bundled map and swapping in the
//! live catalog once it has been fetched. [`GallerySelection`] tracks what the product
//! gallery is showing for one combo.

pub mod api;
pub mod gallery;
pub mod store;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the Giftbox API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: GIFTBOX_API_URL (or API_URL), defaulting to the
    /// local development server.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("GIFTBOX_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.build_url(path))
            .send()
            .await
            .context("Failed to send request")?;

        parse_response(response).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        parse_response(response).await
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.build_url(path))
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(anyhow::anyhow!(
            "API request failed with status {}: {}",
            status,
            error_text
        ));
    }

    response
        .json()
        .await
        .context("Failed to parse response as JSON")
}

pub use api::{HealthStatus, LogoUpload};
pub use gallery::GallerySelection;
pub use store::AssetStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("https://api.example.com/".to_string()).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.build_url("/api/assets"),
            "https://api.example.com/api/assets"
        );
    }

    #[tokio::test]
    async fn test_error_status_carries_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/assets")
            .with_status(502)
            .with_body("upstream down")
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let err = client
            .get::<serde_json::Value>("/api/assets")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("upstream down"));
    }
}
