//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short URL records.
///
/// Code uniqueness and click counting are enforced at the storage layer:
/// [`create`](Self::create) relies on a unique constraint rather than a
/// prior existence check, and [`increment_clicks`](Self::increment_clicks)
/// bumps the counter in a single atomic statement. Concurrent requests
/// therefore cannot duplicate a code or lose counter updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new URL record, reserving its short code atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found (live or expired)
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the click counter of a live record and
    /// returns its original URL.
    ///
    /// Matches only records whose expiry is absent or in the future.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(original_url))` if a live record was updated
    /// - `Ok(None)` if the code is unknown or the record has expired
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Deletes a record by its short code.
    ///
    /// Returns `Ok(true)` if a record was deleted, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError>;
}
