//! Customizer wizard state.
//!
//! The wizard is linear: `Onboarding -> Customizing -> Previewing`. `Reset` returns to
//! onboarding from anywhere and `AdjustOptions` goes back from the preview to the options.

use serde::{Deserialize, Serialize};

use crate::combo_key::{build_combo_key, ComboKey};
use crate::error::AppError;
use crate::models::PreviewRequest;
use crate::palette::{box_colors, font_options, foil_colors, ribbon_colors, ColorSelection, FontOption};

pub const DUET_MIN_QUANTITY: u32 = 50;
pub const SIGNATURE_MIN_QUANTITY: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Onboarding,
    Customizing,
    Previewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Duet,
    Signature,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Duet => "duet",
            Level::Signature => "signature",
        }
    }

    pub fn min_quantity(&self) -> u32 {
        match self {
            Level::Duet => DUET_MIN_QUANTITY,
            Level::Signature => SIGNATURE_MIN_QUANTITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeStyle {
    Standard,
    Marble,
    Border,
}

impl MarqueeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarqueeStyle::Standard => "standard",
            MarqueeStyle::Marble => "marble",
            MarqueeStyle::Border => "border",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HangTagStyle {
    Square,
    Octagon,
    Rectangle,
}

impl HangTagStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HangTagStyle::Square => "square",
            HangTagStyle::Octagon => "octagon",
            HangTagStyle::Rectangle => "rectangle",
        }
    }
}

/// Text fields editable from the onboarding and options forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    CompanyName,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizerState {
    pub step: WizardStep,
    pub level: Level,
    pub box_color: ColorSelection,
    pub foil_color: ColorSelection,
    pub ribbon_color: ColorSelection,
    pub marquee_style: MarqueeStyle,
    pub hang_tag_style: HangTagStyle,
    pub font: FontOption,
    pub company_name: String,
    pub email: String,
    pub quantity: u32,
    pub message: String,
    pub logo_url: Option<String>,
    pub session_id: Option<String>,
    pub preview_images: Vec<String>,
    pub preview_message: String,
}

impl Default for CustomizerState {
    fn default() -> Self {
        Self {
            step: WizardStep::Onboarding,
            level: Level::Duet,
            box_color: first_or_blank(box_colors()),
            foil_color: first_or_blank(foil_colors()),
            ribbon_color: first_or_blank(ribbon_colors()),
            marquee_style: MarqueeStyle::Standard,
            hang_tag_style: HangTagStyle::Square,
            font: font_options()
                .into_iter()
                .next()
                .unwrap_or_else(|| FontOption {
                    name: String::new(),
                    web_font: String::new(),
                    weight: 400,
                    italic: false,
                    category: crate::palette::FontCategory::Serif,
                }),
            company_name: String::new(),
            email: String::new(),
            quantity: DUET_MIN_QUANTITY,
            message: String::new(),
            logo_url: None,
            session_id: None,
            preview_images: Vec::new(),
            preview_message: String::new(),
        }
    }
}

fn first_or_blank(colors: Vec<ColorSelection>) -> ColorSelection {
    colors
        .into_iter()
        .next()
        .unwrap_or_else(|| ColorSelection::new("", ""))
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomizerAction {
    SetLevel(Level),
    SetBoxColor(ColorSelection),
    SetFoilColor(ColorSelection),
    SetRibbonColor(ColorSelection),
    SetMarqueeStyle(MarqueeStyle),
    SetHangTagStyle(HangTagStyle),
    SetFont(FontOption),
    SetField(TextField, String),
    SetQuantity(u32),
    /// Result of a logo upload.
    SetSession { session_id: String, logo_url: String },
    ClearLogo,
    /// Leave onboarding for the options screen.
    Continue,
    /// Show the images returned by a preview request.
    SetPreview { images: Vec<String>, message: String },
    /// Go back from the preview to the options screen.
    AdjustOptions,
    Reset,
}

impl CustomizerState {
    /// Apply an action. Illegal step transitions are rejected and leave the state untouched.
    pub fn apply(&mut self, action: CustomizerAction) -> Result<(), AppError> {
        match action {
            CustomizerAction::SetLevel(level) => self.level = level,
            CustomizerAction::SetBoxColor(color) => self.box_color = color,
            CustomizerAction::SetFoilColor(color) => self.foil_color = color,
            CustomizerAction::SetRibbonColor(color) => self.ribbon_color = color,
            CustomizerAction::SetMarqueeStyle(style) => self.marquee_style = style,
            CustomizerAction::SetHangTagStyle(style) => self.hang_tag_style = style,
            CustomizerAction::SetFont(font) => self.font = font,
            CustomizerAction::SetField(field, value) => match field {
                TextField::CompanyName => self.company_name = value,
                TextField::Email => self.email = value,
                TextField::Message => self.message = value,
            },
            CustomizerAction::SetQuantity(quantity) => self.quantity = quantity,
            CustomizerAction::SetSession {
                session_id,
                logo_url,
            } => {
                self.session_id = Some(session_id);
                self.logo_url = Some(logo_url);
            }
            CustomizerAction::ClearLogo => self.logo_url = None,
            CustomizerAction::Continue => {
                self.expect_step(WizardStep::Onboarding, "continue")?;
                if self.company_name.trim().is_empty() {
                    return Err(AppError::Validation(
                        "Please enter your company name.".to_string(),
                    ));
                }
                if self.email.trim().is_empty() {
                    return Err(AppError::Validation(
                        "Please enter your email address.".to_string(),
                    ));
                }
                self.step = WizardStep::Customizing;
            }
            CustomizerAction::SetPreview { images, message } => {
                self.expect_step(WizardStep::Customizing, "show a preview")?;
                self.preview_images = images;
                self.preview_message = message;
                self.step = WizardStep::Previewing;
            }
            CustomizerAction::AdjustOptions => {
                self.expect_step(WizardStep::Previewing, "adjust options")?;
                self.step = WizardStep::Customizing;
            }
            CustomizerAction::Reset => *self = CustomizerState::default(),
        }
        Ok(())
    }

    fn expect_step(&self, expected: WizardStep, action: &str) -> Result<(), AppError> {
        if self.step != expected {
            return Err(AppError::Validation(format!(
                "Cannot {} from the {:?} step",
                action, self.step
            )));
        }
        Ok(())
    }

    /// Combo key of the current color selection.
    pub fn combo_key(&self) -> ComboKey {
        build_combo_key(
            &self.box_color.name,
            &self.foil_color.name,
            &self.ribbon_color.name,
        )
    }

    /// Check the order minimum for the selected level.
    pub fn validate_for_preview(&self) -> Result<(), AppError> {
        let min = self.level.min_quantity();
        if self.quantity < min {
            return Err(AppError::Validation(format!(
                "Minimum quantity is {} units.",
                format_thousands(min)
            )));
        }
        Ok(())
    }

    /// Build the preview request for the current state.
    pub fn preview_request(&self) -> PreviewRequest {
        PreviewRequest {
            company_name: self.company_name.clone(),
            box_color: self.box_color.name.clone(),
            foil_color: self.foil_color.name.clone(),
            ribbon_color: self.ribbon_color.name.clone(),
            logo_url: Some(self.logo_url.clone().unwrap_or_default()),
            email: Some(self.email.clone()),
            quantity: Some(self.quantity.to_string()),
            level: Some(self.level.as_str().to_string()),
            font: Some(self.font.name.clone()),
            marquee_style: Some(self.marquee_style.as_str().to_string()),
            hang_tag_style: Some(self.hang_tag_style.as_str().to_string()),
            message: Some(self.message.clone()),
        }
    }
}

fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
