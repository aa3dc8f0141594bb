//! Request-level failures of the customizer.
//!
//! [`AppError`] is what handlers return. How each variant looks on the wire (status code,
//! machine code, whether details may be shown) is described by [`ErrorMetadata`], so the HTTP
//! layer never matches on variants itself.
//!
//! Validation failures are the caller's to fix. Catalog failures are normally absorbed by the
//! resolver before they get here. Logo upload failures fail the request.

/// Severity at which an error is logged when it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Caller mistakes
    Debug,
    /// Upstream trouble the service can ride out
    Warn,
    /// Failures the caller cannot fix
    Error,
}

/// Presentation of an error to HTTP clients.
pub trait ErrorMetadata {
    fn http_status_code(&self) -> u16;

    /// Stable machine-readable code, e.g. `VALIDATION_ERROR`.
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same request may succeed.
    fn is_recoverable(&self) -> bool;

    fn suggested_action(&self) -> Option<&'static str>;

    /// Message safe to show the customer.
    fn client_message(&self) -> String;

    /// Sensitive errors never expose their internal message.
    fn is_sensitive(&self) -> bool;

    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is missing or blank. The message is shown verbatim.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request could not be decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            source: None,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("Malformed JSON: {}", err))
    }
}

/// Fixed wire presentation of one variant.
struct Presentation {
    status: u16,
    code: &'static str,
    recoverable: bool,
    action: Option<&'static str>,
    sensitive: bool,
    level: LogLevel,
}

const VALIDATION: Presentation = Presentation {
    status: 400,
    code: "VALIDATION_ERROR",
    recoverable: false,
    action: Some("Fill in the required fields and try again"),
    sensitive: false,
    level: LogLevel::Debug,
};

const INVALID_INPUT: Presentation = Presentation {
    status: 400,
    code: "INVALID_INPUT",
    recoverable: false,
    action: Some("Check the request body and try again"),
    sensitive: false,
    level: LogLevel::Debug,
};

const PAYLOAD_TOO_LARGE: Presentation = Presentation {
    status: 413,
    code: "PAYLOAD_TOO_LARGE",
    recoverable: false,
    action: Some("Reduce the logo file size"),
    sensitive: false,
    level: LogLevel::Debug,
};

const CATALOG_UNAVAILABLE: Presentation = Presentation {
    status: 503,
    code: "CATALOG_UNAVAILABLE",
    recoverable: true,
    action: Some("Retry after a short delay"),
    sensitive: true,
    level: LogLevel::Warn,
};

const UPLOAD_FAILED: Presentation = Presentation {
    status: 500,
    code: "UPLOAD_FAILED",
    recoverable: true,
    action: Some("Retry the upload or use a different image"),
    sensitive: true,
    level: LogLevel::Error,
};

const INTERNAL: Presentation = Presentation {
    status: 500,
    code: "INTERNAL_ERROR",
    recoverable: true,
    action: Some("Retry after a short delay"),
    sensitive: true,
    level: LogLevel::Error,
};

impl AppError {
    fn presentation(&self) -> &'static Presentation {
        match self {
            AppError::Validation(_) => &VALIDATION,
            AppError::InvalidInput(_) => &INVALID_INPUT,
            AppError::PayloadTooLarge(_) => &PAYLOAD_TOO_LARGE,
            AppError::CatalogUnavailable(_) => &CATALOG_UNAVAILABLE,
            AppError::UploadFailed(_) => &UPLOAD_FAILED,
            AppError::Internal { .. } => &INTERNAL,
        }
    }

    /// Variant name, used as `error_type` in non-production error bodies.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::CatalogUnavailable(_) => "CatalogUnavailable",
            AppError::UploadFailed(_) => "UploadFailed",
            AppError::Internal { .. } => "Internal",
        }
    }

    /// Display string followed by up to five `Caused by:` lines.
    pub fn detailed_message(&self) -> String {
        const MAX_CAUSES: usize = 5;

        let mut details = self.to_string();
        let mut causes = std::iter::successors(std::error::Error::source(self), |e| e.source());
        for cause in causes.by_ref().take(MAX_CAUSES) {
            details.push_str(&format!("\n  Caused by: {}", cause));
        }
        if causes.next().is_some() {
            details.push_str("\n  ... (truncated)");
        }
        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        self.presentation().status
    }

    fn error_code(&self) -> &'static str {
        self.presentation().code
    }

    fn is_recoverable(&self) -> bool {
        self.presentation().recoverable
    }

    fn suggested_action(&self) -> Option<&'static str> {
        self.presentation().action
    }

    fn is_sensitive(&self) -> bool {
        self.presentation().sensitive
    }

    fn log_level(&self) -> LogLevel {
        self.presentation().level
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::InvalidInput(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::CatalogUnavailable(_) => "Asset catalog unavailable".to_string(),
            AppError::UploadFailed(_) => "Logo upload failed".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_metadata() {
        let err = AppError::Validation("Company name required".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.client_message(), "Company name required");
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_upload_failed_hides_upstream_details() {
        let err = AppError::UploadFailed("imgbb: invalid API key".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Logo upload failed");
        assert!(err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_catalog_unavailable_is_recoverable() {
        let err = AppError::CatalogUnavailable("HTTP 502".to_string());
        assert_eq!(err.http_status_code(), 503);
        assert!(err.is_recoverable());
        assert_eq!(err.error_type(), "CatalogUnavailable");
    }

    #[test]
    fn test_detailed_message_includes_source_chain() {
        let source = anyhow::anyhow!("connection reset").context("catalog refresh");
        let err = AppError::from(source);
        let details = err.detailed_message();
        assert!(details.starts_with("Internal error: catalog refresh"));
        assert!(details.contains("Caused by: catalog refresh"));
        assert!(!details.contains("truncated"));
    }

    #[test]
    fn test_internal_without_source() {
        let err = AppError::internal("palette mismatch");
        assert_eq!(err.detailed_message(), "Internal error: palette mismatch");
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn test_from_serde_json_error_is_invalid_input() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(parse_err);
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
