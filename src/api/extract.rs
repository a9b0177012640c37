//! Request extractors with JSON error reporting.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` whose rejections render as [`AppError::Validation`].
///
/// Invalid JSON, a missing field or a wrong content type all answer
/// `400 {"error": "..."}` instead of axum's plain-text 400/415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejections render as [`AppError::NotFound`].
///
/// A segment that does not decode to UTF-8 cannot be a short code.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
