//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "my-link",                // optional
///   "expires_at": "2026-12-31T00:00:00Z"     // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aZ3k9Q",
///   "short_url": "http://localhost:3000/aZ3k9Q"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on a missing/invalid URL or an out-of-range
/// custom code, 409 Conflict if the custom code is already taken, and
/// 500 on storage failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let original_url = payload
        .url
        .ok_or_else(|| AppError::bad_request("URL is required", json!({ "field": "url" })))?;

    let record = state
        .shorten_service
        .create_short_url(original_url, payload.custom_code, payload.expires_at)
        .await?;

    let short_url = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        record.short_code
    );

    tracing::info!(
        "Created short URL: {} -> {}",
        record.short_code,
        record.original_url
    );

    Ok(Json(ShortenResponse {
        short_code: record.short_code,
        short_url,
    }))
}
