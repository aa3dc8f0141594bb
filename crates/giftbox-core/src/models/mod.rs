pub mod asset;
pub mod logo;
pub mod preview;

pub use asset::{AssetStatus, AssetsResponse, CatalogSnapshot, ComboAsset, FallbackAssets};
pub use logo::LogoUploadResponse;
pub use preview::{CustomizationEcho, PreviewRequest, PreviewResult, ProductInfo};
