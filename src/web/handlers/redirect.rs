//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /u/{code}`
///
/// The stored URL is issued verbatim as a 307 Temporary Redirect; no
/// normalization or scheme rewriting happens on this path.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.url_service.resolve(&code).await?;

    debug!(code = %code, target = %original_url, "redirecting");

    Ok(Redirect::temporary(&original_url))
}
