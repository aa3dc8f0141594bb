//! Giftbox Core Library
//!
//! Domain models, combo-key derivation, palettes, the customizer state machine, error types
//! and configuration shared by the API server, the services and the API client.

pub mod combo_key;
pub mod config;
pub mod constants;
pub mod customizer;
pub mod error;
pub mod models;
pub mod palette;

// Re-export commonly used types
pub use combo_key::{build_combo_key, normalize_segment, ComboKey};
pub use config::{BaseConfig, Config, CustomizerConfig};
pub use customizer::{CustomizerAction, CustomizerState, Level, WizardStep};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    AssetStatus, AssetsResponse, CatalogSnapshot, ComboAsset, CustomizationEcho, FallbackAssets,
    LogoUploadResponse, PreviewRequest, PreviewResult, ProductInfo,
};
pub use palette::{check_palette_keys, ColorSelection, PaletteError};
