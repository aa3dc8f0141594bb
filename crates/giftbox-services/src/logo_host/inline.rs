use async_trait::async_trait;
use base64::Engine;

use super::{LogoFile, LogoHost, UploadResult};

/// Development host: embeds the logo in a `data:` URL instead of uploading it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDataUrlHost;

#[async_trait]
impl LogoHost for InlineDataUrlHost {
    async fn upload(&self, logo: &LogoFile) -> UploadResult<String> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&logo.data);
        Ok(format!("data:{};base64,{}", logo.content_type, encoded))
    }

    fn backend_name(&self) -> &'static str {
        "inline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_data_url() {
        let logo = LogoFile {
            data: Bytes::from_static(b"hello"),
            content_type: "image/svg+xml".to_string(),
            company_name: "Acme".to_string(),
        };
        let url = InlineDataUrlHost.upload(&logo).await.unwrap();
        assert_eq!(url, "data:image/svg+xml;base64,aGVsbG8=");
    }
}
