//! Application error type and its HTTP mapping.
//!
//! Every failure is handled at the handler boundary: [`AppError`] implements
//! [`IntoResponse`] and always renders a `{"error": "..."}` JSON body.
//! Store failures keep their detail in the logs only.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::utils::db_error::unique_violation_constraint;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input URL or request body.
    #[error("{0}")]
    Validation(String),

    /// Unknown short code.
    #[error("{0}")]
    NotFound(String),

    /// The URL has already been shortened.
    #[error("{0}")]
    Conflict(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A unique constraint rejected the statement.
    #[error("Unique constraint violation on {constraint}")]
    ConstraintViolation { constraint: String },

    /// Connection, transport or deadline failure talking to the store.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The generator ran out of attempts without finding a free code.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ConstraintViolation { .. }
            | AppError::StoreUnavailable(_)
            | AppError::CodeSpaceExhausted { .. }
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients. Store details never leave the process.
    fn public_message(&self) -> String {
        match self {
            AppError::ConstraintViolation { .. } | AppError::StoreUnavailable(_) => {
                "Database error".to_string()
            }
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(constraint) = unique_violation_constraint(&e) {
            return AppError::ConstraintViolation { constraint };
        }

        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "unusable path parameter");
        AppError::not_found("Short code not found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::StoreUnavailable("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ConstraintViolation {
                constraint: "shortened_url_key".into()
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::CodeSpaceExhausted { attempts: 5 }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::not_found("Short code not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "Short code not found" }));
    }

    #[tokio::test]
    async fn test_store_details_are_hidden() {
        let response =
            AppError::StoreUnavailable("connection refused to 10.0.0.3".into()).into_response();

        let json = body_json(response).await;
        assert_eq!(json["error"], "Database error");
    }

    #[test]
    fn test_pool_timeout_maps_to_store_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn test_code_space_exhausted_message() {
        let err = AppError::CodeSpaceExhausted { attempts: 5 };
        assert!(err.to_string().contains("5 attempts"));
    }
}
