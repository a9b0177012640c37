//! Handler for the shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::record::UrlRecordResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the full record.
///
/// # Errors
///
/// - 400 Bad Request if the body or URL is malformed
/// - 409 Conflict if the URL has already been shortened
/// - 500 on store failures or code space exhaustion
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ShortenRequest>,
) -> Result<(StatusCode, Json<UrlRecordResponse>), AppError> {
    payload.validate()?;

    let record = state.url_service.create(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
