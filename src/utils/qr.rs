//! QR code rendering for the share views.

use crate::error::AppError;
use base64::Engine as _;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

/// Renders the target text as a QR code and returns it as an inline
/// `data:image/svg+xml;base64,...` URI for direct embedding in an `<img>`.
///
/// Uses error-correction level Q, matching what link-sharing views
/// conventionally use for scannability on screens.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the target does not fit into a QR
/// symbol (only possible for extremely long URLs).
pub fn svg_data_uri(target: &str) -> Result<String, AppError> {
    let code = QrCode::with_error_correction_level(target.as_bytes(), EcLevel::Q)
        .map_err(|e| AppError::internal(format!("failed to encode QR code: {e}")))?;

    let image = code
        .render()
        .min_dimensions(240, 240)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(image.as_bytes());

    Ok(format!("data:image/svg+xml;base64,{encoded}"))
}
