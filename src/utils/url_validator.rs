//! Target URL validation.
//!
//! URLs are stored exactly as the client submitted them (surrounding
//! whitespace aside), so a redirect always points at the original string.
//! Validation only decides whether the string is an acceptable target.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a redirect target and returns it trimmed.
///
/// # Rules
///
/// 1. Not empty and at most [`MAX_URL_LENGTH`] characters
/// 2. No interior whitespace or control characters
/// 3. Parses as an absolute URL
/// 4. Scheme is `http` or `https`
/// 5. Has a non-empty host
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    // The parser silently drops tabs and newlines; the stored string must be
    // usable as a Location header as-is.
    if trimmed.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed)
}
