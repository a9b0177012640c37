//! JSON representation of a shortened URL record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortenedUrl;

/// Record returned by create, update and stats.
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com",
///   "shortCode": "aZ3kQ9xP0b",
///   "createdAt": "2025-01-01T12:00:00Z",
///   "updatedAt": "2025-01-01T12:00:00Z",
///   "accessed": 0
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub accessed: i64,
}

impl From<ShortenedUrl> for UrlRecordResponse {
    fn from(record: ShortenedUrl) -> Self {
        Self {
            id: record.id,
            url: record.url,
            short_code: record.short_code,
            created_at: record.created_at,
            updated_at: record.updated_at,
            accessed: record.accessed,
        }
    }
}
