//! ImgBB image hosting.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use super::{LogoFile, LogoHost, UploadError, UploadResult};

#[derive(Debug, Deserialize)]
struct ImgBbResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ImgBbData>,
}

#[derive(Debug, Deserialize)]
struct ImgBbData {
    #[serde(default)]
    url: Option<String>,
}

/// Uploads logos to ImgBB as base64 form data.
pub struct ImgBbHost {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
    timeout: Duration,
}

impl Debug for ImgBbHost {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ImgBbHost")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl ImgBbHost {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> UploadResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url,
            api_key,
            timeout,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> UploadError {
        if err.is_timeout() {
            UploadError::Timeout(self.timeout)
        } else {
            UploadError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl LogoHost for ImgBbHost {
    #[tracing::instrument(skip(self, logo), fields(name = %logo.upload_name(), size = logo.data.len()))]
    async fn upload(&self, logo: &LogoFile) -> UploadResult<String> {
        let image = base64::engine::general_purpose::STANDARD.encode(&logo.data);
        let form = reqwest::multipart::Form::new()
            .text("key", self.api_key.clone())
            .text("image", image)
            .text("name", logo.upload_name());

        let response = self
            .http_client
            .post(&self.api_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        let parsed: ImgBbResponse = serde_json::from_str(&body)
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        if !parsed.success {
            return Err(UploadError::InvalidResponse(
                "success flag not set".to_string(),
            ));
        }

        parsed
            .data
            .and_then(|data| data.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| UploadError::InvalidResponse("missing data.url".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "imgbb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use mockito::Matcher;

    fn logo() -> LogoFile {
        LogoFile {
            data: Bytes::from_static(b"\x89PNG fake"),
            content_type: "image/png".to_string(),
            company_name: "Acme Corp".to_string(),
        }
    }

    fn host(server: &mockito::ServerGuard) -> ImgBbHost {
        ImgBbHost::new(
            format!("{}/1/upload", server.url()),
            "imgbb-key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_upload_returns_hosted_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/1/upload")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("imgbb-key".to_string()),
                Matcher::Regex("Acme_Corp_logo".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": {"url": "https://i.ibb.co/abc/Acme_Corp_logo.png"}}"#)
            .create_async()
            .await;

        let url = host(&server).upload(&logo()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(url, "https://i.ibb.co/abc/Acme_Corp_logo.png");
    }

    #[tokio::test]
    async fn test_rejected_upload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/1/upload")
            .with_status(400)
            .with_body(r#"{"status_code": 400, "error": {"message": "Invalid API v1 key."}}"#)
            .create_async()
            .await;

        let err = host(&server).upload(&logo()).await.unwrap_err();
        assert!(matches!(err, UploadError::Rejected { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_success_false_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/1/upload")
            .with_status(200)
            .with_body(r#"{"success": false}"#)
            .create_async()
            .await;

        let err = host(&server).upload(&logo()).await.unwrap_err();
        assert!(matches!(err, UploadError::InvalidResponse(_)));
    }
}
