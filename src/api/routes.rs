//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
    update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST   /shorten`            - Create a short code
/// - `GET    /health`             - Health check
/// - `GET    /{shortCode}`        - Redirect to the original URL
/// - `PUT    /{shortCode}`        - Point the code at a new URL
/// - `DELETE /{shortCode}`        - Delete the code
/// - `GET    /{shortCode}/stats`  - Record with access count
///
/// Static segments win over `{shortCode}`, which is why `shorten` and
/// `health` are never handed out as codes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route(
            "/{short_code}",
            get(redirect_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/{short_code}/stats", get(stats_handler))
}
