//! Logo hosting abstraction
//!
//! Uploaded logos are handed to a [`LogoHost`], which returns the URL the storefront should
//! reference from then on.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use giftbox_core::AppError;
use thiserror::Error;

/// Logo upload errors
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Image host timed out after {0:?}")]
    Timeout(Duration),

    #[error("Image host transport error: {0}")]
    Transport(String),

    #[error("Image host rejected the upload with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Image host returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for logo uploads
pub type UploadResult<T> = Result<T, UploadError>;

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        AppError::UploadFailed(err.to_string())
    }
}

/// A logo file received from the storefront.
#[derive(Debug, Clone)]
pub struct LogoFile {
    pub data: Bytes,
    pub content_type: String,
    pub company_name: String,
}

impl LogoFile {
    /// Upload name: the company name with every character outside `[A-Za-z0-9]` replaced by
    /// `_`, suffixed with `_logo`.
    pub fn upload_name(&self) -> String {
        let sanitized: String = self
            .company_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}_logo", sanitized)
    }
}

#[async_trait]
pub trait LogoHost: Send + Sync {
    /// Store the logo and return its public URL.
    async fn upload(&self, logo: &LogoFile) -> UploadResult<String>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_name_is_sanitized() {
        let logo = LogoFile {
            data: Bytes::new(),
            content_type: "image/png".to_string(),
            company_name: "Acme & Sons, Inc.".to_string(),
        };
        assert_eq!(logo.upload_name(), "Acme___Sons__Inc__logo");
    }

    #[test]
    fn test_upload_error_maps_to_upload_failed() {
        let err: AppError = UploadError::Rejected {
            status: 400,
            body: "Invalid API v1 key.".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::UploadFailed(_)));
    }
}
