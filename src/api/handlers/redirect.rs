//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (atomic click-count increment for live records)
/// 2. Return `302 Found` with the original URL in `Location`
///
/// Expired records are deleted as a side effect of the failed resolve.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the short code has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.resolve_service.resolve(&code).await?;

    tracing::debug!("Redirected {code} -> {original_url}");

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
