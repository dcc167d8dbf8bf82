//! Short URL creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, generate_code, validate_custom_code,
};
use crate::utils::url_validator::validate_target_url;

/// Attempts per code length before escalating to a longer code.
const MAX_ATTEMPTS_PER_LENGTH: usize = 10;

/// Service for allocating short codes and creating URL records.
///
/// Codes are reserved by the insert itself: the repository's unique
/// constraint rejects duplicates, so there is no existence-check window
/// between generation and commit.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL record.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The target URL to redirect to (must be HTTP/HTTPS)
    /// - `custom_code` - Optional caller-chosen short code (validated if provided)
    /// - `expires_at` - Optional expiry timestamp; `None` means the record
    ///   never expires
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    /// Returns [`AppError::Exhausted`] if random generation runs out of retries.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_code: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<UrlRecord, AppError> {
        validate_target_url(&original_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": original_url.clone() })))?;

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            let new_record = NewUrlRecord {
                short_code: custom.clone(),
                original_url,
                expires_at,
            };

            return match self.repository.create(new_record).await {
                Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                    "Custom code already taken",
                    json!({ "code": custom }),
                )),
                other => other,
            };
        }

        self.create_with_generated_code(original_url, expires_at)
            .await
    }

    /// Inserts a record under a freshly generated code, retrying on collision.
    ///
    /// Retries are bounded: after [`MAX_ATTEMPTS_PER_LENGTH`] collisions the
    /// code length grows by one, up to [`MAX_CODE_LENGTH`].
    async fn create_with_generated_code(
        &self,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<UrlRecord, AppError> {
        for length in DEFAULT_CODE_LENGTH..=MAX_CODE_LENGTH {
            for _ in 0..MAX_ATTEMPTS_PER_LENGTH {
                let new_record = NewUrlRecord {
                    short_code: generate_code(length),
                    original_url: original_url.clone(),
                    expires_at,
                };

                match self.repository.create(new_record).await {
                    Err(AppError::Conflict { .. }) => continue,
                    other => return other,
                }
            }

            tracing::warn!(
                "Exhausted {MAX_ATTEMPTS_PER_LENGTH} attempts at code length {length}, escalating"
            );
        }

        Err(AppError::exhausted(
            "Failed to generate unique code",
            json!({ "max_length": MAX_CODE_LENGTH }),
        ))
    }
}
