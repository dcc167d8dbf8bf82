//! Short code resolution and record lifecycle service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for resolving short codes to their target URLs.
///
/// Expired records are evicted lazily: deletion happens only when a
/// resolve finds the record past its expiry. There is no other deletion
/// path in the system.
pub struct ResolveService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ResolveService<R> {
    /// Creates a new resolve service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its original URL, counting the visit.
    ///
    /// The hot path is a single atomic statement that increments the
    /// click counter and returns the URL for a live record. A miss falls
    /// back to a lookup to distinguish unknown codes from expired ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Gone`] if the record has expired; the record is
    /// deleted as a side effect (best-effort, failures are logged and
    /// swallowed).
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if let Some(url) = self.repository.increment_clicks(code).await? {
            return Ok(url);
        }

        match self.repository.find_by_code(code).await? {
            None => Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            )),
            Some(record) if record.is_expired() => {
                match self.repository.delete_by_code(code).await {
                    Ok(true) => tracing::info!("Deleted expired URL: {code}"),
                    Ok(false) => {}
                    Err(e) => tracing::warn!("Failed to delete expired URL {code}: {e}"),
                }

                Err(AppError::gone(
                    "This short URL has expired",
                    json!({ "code": code }),
                ))
            }
            // The record went live between the two statements; return the
            // URL without the missed count.
            Some(record) => Ok(record.original_url),
        }
    }
}
