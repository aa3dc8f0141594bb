//! Bundled color palettes and font options.
//!
//! Palette names feed [`build_combo_key`](crate::combo_key::build_combo_key). Two names that
//! normalize to the same segment would address the same catalog row, so
//! [`check_palette_keys`] is run at startup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::combo_key::{normalize_segment, SEGMENT_SEPARATOR};

/// A selectable color. Only `name` participates in key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorSelection {
    pub name: String,
    pub hex: String,
}

impl ColorSelection {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FontCategory {
    Serif,
    #[serde(rename = "Sans Serif")]
    SansSerif,
    Script,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FontOption {
    pub name: String,
    pub web_font: String,
    pub weight: u16,
    pub italic: bool,
    pub category: FontCategory,
}

fn font(name: &str, web_font: &str, weight: u16, italic: bool, category: FontCategory) -> FontOption {
    FontOption {
        name: name.to_string(),
        web_font: web_font.to_string(),
        weight,
        italic,
        category,
    }
}

pub fn box_colors() -> Vec<ColorSelection> {
    vec![
        ColorSelection::new("Pure Black", "#1a1a1a"),
        ColorSelection::new("Navy Blue", "#1a2744"),
        ColorSelection::new("Charcoal Grey", "#4a4a4a"),
        ColorSelection::new("True Blue", "#2c5aa0"),
        ColorSelection::new("Light Grey", "#b0b0b0"),
        ColorSelection::new("Camel Tan", "#c4956a"),
        ColorSelection::new("Cream Natural", "#f5e6c8"),
        ColorSelection::new("Pure White", "#ffffff"),
        ColorSelection::new("Forest Green", "#2d5a3d"),
    ]
}

pub fn foil_colors() -> Vec<ColorSelection> {
    vec![
        ColorSelection::new("Gold", "#c5a059"),
        ColorSelection::new("Silver", "#c0c0c0"),
        ColorSelection::new("White", "#ffffff"),
        ColorSelection::new("Black", "#1a1a1a"),
    ]
}

pub fn ribbon_colors() -> Vec<ColorSelection> {
    vec![
        ColorSelection::new("Vosges Purple", "#4a2d4d"),
        ColorSelection::new("White", "#ffffff"),
        ColorSelection::new("Black", "#1a1a1a"),
    ]
}

pub fn font_options() -> Vec<FontOption> {
    use FontCategory::*;
    vec![
        font("Chronicle Display Light", "Playfair Display", 300, false, Serif),
        font("Mrs. Eaves Roman", "Libre Baskerville", 400, false, Serif),
        font("DIDOT ALL CAPS", "Playfair Display SC", 400, false, Serif),
        font("Grand Cru", "Cormorant Garamond", 400, false, Serif),
        font("Gotham Book", "Montserrat", 400, false, SansSerif),
        font("Roboto Light", "Roboto", 300, false, SansSerif),
        font("Chronicle Display Light Italic", "Playfair Display", 300, true, Serif),
        font("Snell Roundhand", "Great Vibes", 400, false, Script),
    ]
}

/// Problem found in a palette by [`check_palette_keys`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("{palette} palette: '{first}' and '{second}' both normalize to '{segment}'")]
    Collision {
        palette: &'static str,
        first: String,
        second: String,
        segment: String,
    },

    #[error("{palette} palette: '{name}' contains the key separator '_'")]
    ContainsSeparator { palette: &'static str, name: String },
}

/// Verify that every name in a palette maps to a distinct key segment.
pub fn check_palette(palette: &'static str, colors: &[ColorSelection]) -> Result<(), PaletteError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for color in colors {
        if color.name.contains(SEGMENT_SEPARATOR) {
            return Err(PaletteError::ContainsSeparator {
                palette,
                name: color.name.clone(),
            });
        }
        let segment = normalize_segment(&color.name);
        if let Some(first) = seen.insert(segment.clone(), &color.name) {
            return Err(PaletteError::Collision {
                palette,
                first: first.to_string(),
                second: color.name.clone(),
                segment,
            });
        }
    }
    Ok(())
}

/// Run [`check_palette`] over the bundled box, foil and ribbon palettes.
pub fn check_palette_keys() -> Result<(), PaletteError> {
    check_palette("box", &box_colors())?;
    check_palette("foil", &foil_colors())?;
    check_palette("ribbon", &ribbon_colors())?;
    Ok(())
}
