//! DTO for the update endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `PUT /{shortCode}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    /// New destination for the short code.
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 2048, message = "URL is too long")
    )]
    pub url: String,
}
