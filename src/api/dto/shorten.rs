//! DTO for the shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 2048, message = "URL is too long")
    )]
    pub url: String,
}
