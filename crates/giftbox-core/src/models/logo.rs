use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body of `POST /api/upload-logo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogoUploadResponse {
    pub session_id: String,
    /// Public URL of the hosted logo, or an inline `data:` URL when no host is configured.
    pub logo_url: String,
    pub company_name: String,
    pub email: String,
}
