use std::time::Duration;

use giftbox_core::AppError;
use thiserror::Error;

/// Catalog query errors. Every variant means "catalog unavailable" to callers.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Catalog transport error: {0}")]
    Transport(String),

    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),

    #[error("Catalog configuration error: {0}")]
    Config(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout(timeout)
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::CatalogUnavailable(err.to_string())
    }
}
