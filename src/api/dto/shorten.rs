//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    ///
    /// Optional at the type level so a missing field reports as a
    /// validation failure instead of a body-deserialization rejection.
    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,

    /// Optional caller-chosen short code (validated for length and characters).
    pub custom_code: Option<String>,

    /// Optional expiry timestamp. After this time, the link returns 410 Gone
    /// and is deleted on access. Absent means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response for a successfully created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}
