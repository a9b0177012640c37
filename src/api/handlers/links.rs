//! Handlers for short code management (update, delete).

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::record::UrlRecordResponse;
use crate::api::dto::update_url::UpdateUrlRequest;
use crate::api::extract::{JsonBody, PathParam};
use crate::error::AppError;
use crate::state::AppState;

/// Points a short code at a new URL.
///
/// # Endpoint
///
/// `PUT /{shortCode}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://new-destination.com" }
/// ```
///
/// The access counter is left untouched; `updatedAt` is bumped.
///
/// # Errors
///
/// - 400 Bad Request if the body or URL is malformed
/// - 404 Not Found if the short code doesn't exist
/// - 409 Conflict if the URL already belongs to another short code
pub async fn update_url_handler(
    PathParam(short_code): PathParam<String>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateUrlRequest>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .update(&short_code, &payload.url)
        .await?;

    Ok(Json(record.into()))
}

/// Deletes a short code.
///
/// # Endpoint
///
/// `DELETE /{shortCode}`
///
/// The row is removed from the store; the code cannot be recovered.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_url_handler(
    PathParam(short_code): PathParam<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&short_code).await?;

    Ok(StatusCode::NO_CONTENT)
}
