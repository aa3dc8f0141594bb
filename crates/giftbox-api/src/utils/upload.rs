//! Multipart parsing for the logo upload form

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use giftbox_core::AppError;

/// Form field carrying the logo file.
pub const LOGO_FIELD: &str = "logo";

/// MIME type assumed when the client does not label the file.
pub const DEFAULT_LOGO_MIME: &str = "image/png";

/// The logo file part of the form.
#[derive(Debug, Clone)]
pub struct LogoPart {
    pub data: Bytes,
    pub content_type: String,
    pub file_name: Option<String>,
}

/// Parsed logo upload form. Text fields are `None` when absent or blank.
#[derive(Debug, Default)]
pub struct LogoForm {
    pub logo: Option<LogoPart>,
    pub company_name: Option<String>,
    pub email: Option<String>,
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Logo exceeds the maximum upload size".to_string())
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Read the `logo`, `company_name` and `email` fields. Unknown fields are skipped; a second
/// `logo` field is rejected.
pub async fn extract_logo_form(
    mut multipart: Multipart,
    max_size: usize,
) -> Result<LogoForm, AppError> {
    let mut form = LogoForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string).unwrap_or_default();

        match name.as_str() {
            LOGO_FIELD => {
                if form.logo.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple logo fields are not allowed; send exactly one field named 'logo'"
                            .to_string(),
                    ));
                }
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_LOGO_MIME.to_string());
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                validate_file_size(data.len(), max_size)?;

                form.logo = Some(LogoPart {
                    data,
                    content_type,
                    file_name,
                });
            }
            "company_name" => {
                form.company_name = non_blank(field.text().await.map_err(multipart_error)?);
            }
            "email" => {
                form.email = non_blank(field.text().await.map_err(multipart_error)?);
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(form)
}

/// Reject files larger than `max_size` bytes.
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "Logo exceeds the maximum size of {}",
            format_size(max_size)
        )));
    }
    Ok(())
}

fn format_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}
