//! Combo key derivation
//!
//! A combo key identifies one box/foil/ribbon color triple in the asset catalog,
//! e.g. `"pure-black_gold_vosges-purple"`. The same function is used by the API and
//! the client store so both sides agree on cache keys.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Separator between the box, foil and ribbon segments of a key.
pub const SEGMENT_SEPARATOR: char = '_';

/// Canonical identifier for a box/foil/ribbon color combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ComboKey(String);

impl ComboKey {
    /// Wrap an already-normalized key (e.g. a `Combo_Key` value read from the catalog).
    pub fn from_raw(key: impl Into<String>) -> Self {
        ComboKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComboKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ComboKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Normalize one display name into a key segment: lowercase, spaces become hyphens.
///
/// Only the ASCII space is replaced; other whitespace is kept as-is.
pub fn normalize_segment(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Build the combo key for a box/foil/ribbon color triple.
///
/// Never fails. Empty names produce a degenerate but well-formed key (`"__"`).
pub fn build_combo_key(box_color: &str, foil_color: &str, ribbon_color: &str) -> ComboKey {
    ComboKey(format!(
        "{}{sep}{}{sep}{}",
        normalize_segment(box_color),
        normalize_segment(foil_color),
        normalize_segment(ribbon_color),
        sep = SEGMENT_SEPARATOR,
    ))
}
