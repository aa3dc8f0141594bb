//! Client-side asset store
//!
//! Serves combo imagery to the customizer without waiting on the network. The store starts
//! from a bundled map of the priority combos and is replaced, once, by the live catalog when
//! that catalog turns out to be non-empty.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use giftbox_core::constants::default_images;
use giftbox_core::{build_combo_key, AssetStatus, ComboAsset, ComboKey};
use tokio::task::JoinHandle;

use crate::ApiClient;

/// Key of the shared placeholder returned for unknown combos.
pub const FALLBACK_KEY: &str = "fallback";

/// Combos seeded as ready in the catalog before per-combo renders exist.
pub const BUNDLED_COMBOS: [&str; 6] = [
    "pure-black_gold_vosges-purple",
    "pure-black_gold_black",
    "navy-blue_gold_vosges-purple",
    "charcoal-grey_silver_white",
    "pure-white_gold_vosges-purple",
    "forest-green_gold_black",
];

/// The bundled map: every priority combo ready, sharing the generic product images.
pub fn bundled_combos() -> HashMap<ComboKey, ComboAsset> {
    BUNDLED_COMBOS
        .iter()
        .map(|key| {
            let key = ComboKey::from_raw(*key);
            let asset = ComboAsset {
                combo_key: key.clone(),
                status: AssetStatus::Ready,
                images: default_images(),
                video_url: None,
            };
            (key, asset)
        })
        .collect()
}

pub struct AssetStore {
    combos: RwLock<HashMap<ComboKey, ComboAsset>>,
    placeholder: ComboAsset,
    refresh_started: AtomicBool,
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetStore {
    pub fn new() -> Self {
        Self::with_combos(bundled_combos())
    }

    pub fn with_combos(combos: HashMap<ComboKey, ComboAsset>) -> Self {
        Self {
            combos: RwLock::new(combos),
            placeholder: ComboAsset::queued(ComboKey::from_raw(FALLBACK_KEY), default_images()),
            refresh_started: AtomicBool::new(false),
        }
    }

    /// Asset for `key`, or the shared queued placeholder.
    pub fn get_combo(&self, key: &ComboKey) -> ComboAsset {
        self.combos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// [`get_combo`](Self::get_combo) for a color triple.
    pub fn get_combo_for(&self, box_color: &str, foil_color: &str, ribbon_color: &str) -> ComboAsset {
        self.get_combo(&build_combo_key(box_color, foil_color, ribbon_color))
    }

    pub fn len(&self) -> usize {
        self.combos
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the live catalog and swap it in if it has any combos. Only the first call does
    /// anything; failures are logged and leave the current map in place.
    ///
    /// Returns whether the map was replaced.
    pub async fn refresh(&self, client: &ApiClient) -> bool {
        if self.refresh_started.swap(true, Ordering::SeqCst) {
            return false;
        }

        match client.fetch_assets().await {
            Ok(assets) if !assets.combos.is_empty() => {
                let count = assets.combos.len();
                *self.combos.write().unwrap_or_else(PoisonError::into_inner) = assets.combos;
                tracing::debug!(combos = count, "Asset store replaced with live catalog");
                true
            }
            Ok(_) => {
                tracing::debug!("Live catalog is empty, keeping bundled assets");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch asset catalog, keeping bundled assets");
                false
            }
        }
    }

    /// Run [`refresh`](Self::refresh) in the background. Lookups keep answering from the
    /// current map until it completes.
    pub fn spawn_refresh(self: &Arc<Self>, client: ApiClient) -> JoinHandle<bool> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.refresh(&client).await })
    }
}
