//! Giftbox Services Layer
//!
//! The asset catalog client and its snapshot cache, the asset resolver that turns color
//! selections into imagery, and the logo hosting backends. HTTP handling stays in
//! giftbox-api; this crate owns the outbound calls and the fallback policy.

pub mod catalog;
pub mod logo_host;
pub mod resolver;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use catalog::{
    create_catalog, AirtableCatalog, AssetCatalog, CatalogCache, CatalogError, CatalogFilter,
    CatalogRecord, CatalogResult, Clock, SystemClock,
};
pub use logo_host::{
    create_logo_host, ImgBbHost, InlineDataUrlHost, LogoFile, LogoHost, UploadError, UploadResult,
};
pub use resolver::{AssetResolver, ProductSettings};
pub use session::{preview_session_id, upload_session_id};
