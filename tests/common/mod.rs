#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use nanolinq::application::services::{DEFAULT_MAX_ATTEMPTS, UrlService};
use nanolinq::infrastructure::persistence::{DEFAULT_STORE_TIMEOUT, PgUrlRepository};
use nanolinq::routes::router;
use nanolinq::state::AppState;
use nanolinq::utils::code_generator::RandomCodeGenerator;

pub const CODE_LENGTH: usize = 10;

pub async fn insert_test_url(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO shortened (url, short_code) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shortened")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn accessed(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT accessed FROM shortened WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool), DEFAULT_STORE_TIMEOUT));
    let generator = Arc::new(RandomCodeGenerator::new(CODE_LENGTH));
    let url_service = Arc::new(UrlService::new(
        repository,
        generator,
        DEFAULT_MAX_ATTEMPTS,
    ));

    AppState::new(url_service)
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
