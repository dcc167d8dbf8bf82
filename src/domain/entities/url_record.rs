//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored short-code → URL mapping with usage metadata.
///
/// `expires_at` is set once at creation and never updated; `None` means
/// the record never expires. `click_count` only grows until the record
/// is deleted.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl UrlRecord {
    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}
