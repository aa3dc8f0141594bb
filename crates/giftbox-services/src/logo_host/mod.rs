//! Logo hosting backends.

pub mod imgbb;
pub mod inline;
pub mod traits;

use std::sync::Arc;
use std::time::Duration;

use giftbox_core::Config;

pub use imgbb::ImgBbHost;
pub use inline::InlineDataUrlHost;
pub use traits::{LogoFile, LogoHost, UploadError, UploadResult};

/// Create the logo host based on configuration: ImgBB when an API key is set, otherwise
/// inline data URLs.
pub fn create_logo_host(config: &Config) -> UploadResult<Arc<dyn LogoHost>> {
    match config.imgbb_api_key() {
        Some(api_key) => {
            let host = ImgBbHost::new(
                config.imgbb_api_url().to_string(),
                api_key.to_string(),
                Duration::from_secs(config.upload_timeout_secs()),
            )?;
            Ok(Arc::new(host))
        }
        None => Ok(Arc::new(InlineDataUrlHost)),
    }
}
