//! Request fixtures.

use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

/// Smallest valid PNG (1x1, transparent).
pub fn minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

pub fn logo_part(data: Vec<u8>) -> Part {
    Part::bytes(data).file_name("logo.png").mime_type("image/png")
}

/// Upload form with a PNG logo, a company name and an email.
pub fn logo_form(company_name: &str, email: &str) -> MultipartForm {
    MultipartForm::new()
        .add_part("logo", logo_part(minimal_png()))
        .add_text("company_name", company_name.to_string())
        .add_text("email", email.to_string())
}

/// Preview body for the Pure Black / Gold / Vosges Purple combination.
pub fn preview_body(company_name: &str) -> Value {
    json!({
        "company_name": company_name,
        "box_color": "Pure Black",
        "foil_color": "Gold",
        "ribbon_color": "Vosges Purple",
        "email": "events@acme.example",
        "quantity": 250,
        "level": "duet",
        "font": "Gotham Book",
        "message": "Happy holidays"
    })
}
