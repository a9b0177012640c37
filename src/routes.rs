//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin; pre-flight answered with `200`
//! - **Path normalization** - Trailing slash handling
//!
//! Unknown paths answer `404` and known paths with an unsupported method
//! answer `405`, both with the JSON error body.

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with handlers, fallbacks and middleware.
///
/// Integration tests drive this directly.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::UrlService;
    use crate::domain::entities::ShortenedUrl;
    use crate::domain::repositories::MockUrlRepository;
    use crate::error::AppError;
    use crate::utils::code_generator::RandomCodeGenerator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(repo: MockUrlRepository) -> AppState {
        let service = UrlService::new(Arc::new(repo), Arc::new(RandomCodeGenerator::new(10)), 3);
        AppState::new(Arc::new(service))
    }

    fn server(repo: MockUrlRepository) -> TestServer {
        TestServer::new(router(state(repo))).unwrap()
    }

    #[tokio::test]
    async fn test_store_failure_hides_details() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_short_code()
            .returning(|_| Err(AppError::StoreUnavailable("connection reset".to_string())));

        let response = server(repo).get("/abc123").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Database error" }));
    }

    #[tokio::test]
    async fn test_exhausted_code_space_is_server_error() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_url().returning(|_| Ok(false));
        repo.expect_exists_by_short_code().returning(|_| Ok(true));
        repo.expect_insert().times(0);

        let response = server(repo)
            .post("/shorten")
            .json(&json!({ "url": "https://example.com" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn test_url_race_loser_is_server_error() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_url().returning(|_| Ok(false));
        repo.expect_exists_by_short_code().returning(|_| Ok(false));
        repo.expect_insert().times(1).returning(|_| {
            Err(AppError::ConstraintViolation {
                constraint: "shortened_url_key".to_string(),
            })
        });

        let response = server(repo)
            .post("/shorten")
            .json(&json!({ "url": "https://example.com" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Database error" }));
    }

    #[tokio::test]
    async fn test_invalid_code_never_reaches_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_short_code().times(0);
        repo.expect_find_by_code().times(0);

        let server = server(repo);

        server
            .get("/not-valid")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/not-valid/stats")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_utf8_code_is_json_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_short_code().times(0);
        repo.expect_find_by_code().times(0);
        repo.expect_delete().times(0);

        let server = server(repo);

        for response in [
            server.get("/%FF").await,
            server.get("/%FF/stats").await,
            server.delete("/%FF").await,
        ] {
            response.assert_status(StatusCode::NOT_FOUND);
            response.assert_json(&json!({ "error": "Short code not found" }));
        }
    }

    #[tokio::test]
    async fn test_url_with_newline_is_never_stored() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_url().times(0);
        repo.expect_insert().times(0);

        let response = server(repo)
            .post("/shorten")
            .json(&json!({ "url": "https://exa\nmple.com/a" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<serde_json::Value>()["error"].is_string());
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let mut repo = MockUrlRepository::new();
        repo.expect_exists_by_short_code().returning(|_| Ok(true));
        repo.expect_find_by_code().returning(|code| {
            let now = Utc::now();
            Ok(Some(ShortenedUrl::new(
                1,
                "https://example.com".to_string(),
                code.to_string(),
                now,
                now,
                4,
            )))
        });

        let response = app_router(state(repo))
            .oneshot(
                Request::builder()
                    .uri("/abc123/stats/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
