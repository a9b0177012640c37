//! Fallbacks for unmatched paths and methods.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Answers requests whose path matches no route.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Route not found")
}

/// Answers requests whose path matches but whose method does not.
///
/// A bare `OPTIONS` that is not a CORS pre-flight still gets `200` with an
/// empty body; real pre-flights are answered by the CORS layer first.
pub async fn method_not_allowed_handler(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    AppError::MethodNotAllowed.into_response()
}
