//! Handler for short code statistics.

use axum::{Json, extract::State};

use crate::api::dto::record::UrlRecordResponse;
use crate::api::extract::PathParam;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record for a short code, including its access count.
///
/// # Endpoint
///
/// `GET /{shortCode}/stats`
///
/// Reading stats does not count as an access.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    PathParam(short_code): PathParam<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.url_service.stats(&short_code).await?;

    Ok(Json(record.into()))
}
