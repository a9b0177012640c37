//! Shortened URL entity.

use chrono::{DateTime, Utc};

/// A persisted mapping between an original URL and its short code.
///
/// `id` and both timestamps are assigned by the store. `accessed` counts
/// how many times the short code has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub accessed: i64,
}

impl ShortenedUrl {
    pub fn new(
        id: i64,
        url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        accessed: i64,
    ) -> Self {
        Self {
            id,
            url,
            short_code,
            created_at,
            updated_at,
            accessed,
        }
    }

    /// Returns true if the URL was changed after creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortenedUrl {
    pub url: String,
    pub short_code: String,
}
