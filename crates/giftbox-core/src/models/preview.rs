use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of `POST /webhook/customize-preview`.
///
/// Every field is optional on the wire so that missing values surface as validation
/// errors with a field-specific message rather than as JSON decoding failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreviewRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub box_color: String,
    #[serde(default)]
    pub foil_color: String,
    #[serde(default)]
    pub ribbon_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Accepted as a number or a string; echoed back as a string.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hang_tag_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PreviewRequest {
    /// Logo URL if one was supplied and is non-empty.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Product the preview was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductInfo {
    pub sku: String,
    pub name: String,
    pub combo: String,
}

/// Customization fields echoed back to the caller unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomizationEcho {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hang_tag_style: Option<String>,
    pub box_color: String,
    pub foil_color: String,
    pub ribbon_color: String,
    pub quantity: String,
    pub message: String,
    pub logo_url: String,
}

impl CustomizationEcho {
    pub fn from_request(request: &PreviewRequest) -> Self {
        Self {
            level: request.level.clone(),
            font: request.font.clone(),
            marquee_style: request.marquee_style.clone(),
            hang_tag_style: request.hang_tag_style.clone(),
            box_color: request.box_color.clone(),
            foil_color: request.foil_color.clone(),
            ribbon_color: request.ribbon_color.clone(),
            quantity: request.quantity.clone().unwrap_or_default(),
            message: request.message.clone().unwrap_or_default(),
            logo_url: request.logo_url.clone().unwrap_or_default(),
        }
    }
}

/// Response body of a successful preview request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreviewResult {
    pub success: bool,
    pub preview_images: Vec<String>,
    pub session_id: String,
    pub company_name: String,
    pub product: ProductInfo,
    pub customization: CustomizationEcho,
    pub message: String,
}
