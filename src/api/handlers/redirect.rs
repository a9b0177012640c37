//! Handler for short code resolution.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::api::extract::PathParam;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{shortCode}`
///
/// # Request Flow
///
/// 1. Check the code exists
/// 2. Atomically increment its access counter and read the URL
/// 3. Return `301 Moved Permanently` with `Location` set to the URL
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    PathParam(short_code): PathParam<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.url_service.resolve(&short_code).await?;

    let location = HeaderValue::from_bytes(record.url.as_bytes()).map_err(|e| {
        tracing::error!(short_code = %short_code, error = %e, "stored URL is not a valid Location header");
        AppError::internal("Stored URL cannot be used as a redirect target")
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
