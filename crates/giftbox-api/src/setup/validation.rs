//! Startup validation
//!
//! Fails fast on configuration that would otherwise surface as broken requests later.

use anyhow::Result;
use giftbox_core::palette::check_palette_keys;
use giftbox_core::Config;

/// Validate the configuration and the bundled color palettes.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    check_palette_keys().map_err(|e| anyhow::anyhow!("Palette check failed: {}", e))?;

    if config.airtable_api_key().is_none() {
        tracing::warn!("AIRTABLE_API_KEY not set - serving generic product imagery only");
    }
    if config.imgbb_api_key().is_none() {
        tracing::warn!("IMGBB_API_KEY not set - logos will be returned as inline data URLs");
    }

    Ok(())
}
