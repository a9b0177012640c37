mod common;

use nanolinq::domain::entities::NewShortenedUrl;
use nanolinq::domain::repositories::UrlRepository;
use nanolinq::error::AppError;
use nanolinq::infrastructure::persistence::{DEFAULT_STORE_TIMEOUT, PgUrlRepository};
use sqlx::PgPool;
use std::sync::Arc;

fn repository(pool: PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool), DEFAULT_STORE_TIMEOUT)
}

fn new_url(url: &str, code: &str) -> NewShortenedUrl {
    NewShortenedUrl {
        url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_returns_persisted_row(pool: PgPool) {
    let repo = repository(pool);

    let record = repo
        .insert(new_url("https://example.com", "abc123"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.url, "https://example.com");
    assert_eq!(record.short_code, "abc123");
    assert_eq!(record.accessed, 0);
    assert_eq!(record.created_at, record.updated_at);
}

#[sqlx::test]
async fn test_insert_duplicate_url_is_constraint_violation(pool: PgPool) {
    let repo = repository(pool);
    repo.insert(new_url("https://example.com", "first1"))
        .await
        .unwrap();

    let result = repo.insert(new_url("https://example.com", "second2")).await;

    match result {
        Err(AppError::ConstraintViolation { constraint }) => {
            assert_eq!(constraint, "shortened_url_key");
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_insert_duplicate_code_is_constraint_violation(pool: PgPool) {
    let repo = repository(pool);
    repo.insert(new_url("https://example.com/a", "same1"))
        .await
        .unwrap();

    let result = repo.insert(new_url("https://example.com/b", "same1")).await;

    match result {
        Err(AppError::ConstraintViolation { constraint }) => {
            assert_eq!(constraint, "shortened_short_code_key");
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_exists_checks(pool: PgPool) {
    common::insert_test_url(&pool, "exists1", "https://exists.com").await;
    let repo = repository(pool);

    assert!(repo.exists_by_url("https://exists.com").await.unwrap());
    assert!(!repo.exists_by_url("https://missing.com").await.unwrap());
    assert!(repo.exists_by_short_code("exists1").await.unwrap());
    assert!(!repo.exists_by_short_code("missing").await.unwrap());
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::insert_test_url(&pool, "find1", "https://find.com").await;
    let repo = repository(pool);

    let found = repo.find_by_code("find1").await.unwrap();
    assert_eq!(found.unwrap().url, "https://find.com");

    assert!(repo.find_by_code("nope").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_fetch_and_increment_access(pool: PgPool) {
    common::insert_test_url(&pool, "hit1", "https://hit.com").await;
    let repo = repository(pool.clone());

    let first = repo.fetch_and_increment_access("hit1").await.unwrap().unwrap();
    let second = repo.fetch_and_increment_access("hit1").await.unwrap().unwrap();

    assert_eq!(first.accessed, 1);
    assert_eq!(second.accessed, 2);
    assert_eq!(second.url, "https://hit.com");
    assert_eq!(common::accessed(&pool, "hit1").await, 2);
}

#[sqlx::test]
async fn test_fetch_and_increment_unknown_code(pool: PgPool) {
    let repo = repository(pool);

    assert!(repo.fetch_and_increment_access("ghost").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    const N: i64 = 25;

    common::insert_test_url(&pool, "busy1", "https://busy.com").await;
    let repo = Arc::new(repository(pool.clone()));

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.fetch_and_increment_access("busy1").await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(common::accessed(&pool, "busy1").await, N);
}

#[sqlx::test]
async fn test_update_changes_url_and_keeps_accessed(pool: PgPool) {
    common::insert_test_url(&pool, "upd1", "https://old.com").await;
    let repo = repository(pool);
    repo.fetch_and_increment_access("upd1").await.unwrap();

    let updated = repo
        .update("upd1", "https://new.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.url, "https://new.com");
    assert_eq!(updated.accessed, 1);
    assert!(updated.was_updated());
}

#[sqlx::test]
async fn test_update_unknown_code(pool: PgPool) {
    let repo = repository(pool);

    assert!(repo.update("ghost", "https://new.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    common::insert_test_url(&pool, "del1", "https://delete.com").await;
    let repo = repository(pool.clone());

    assert!(repo.delete("del1").await.unwrap());
    assert!(!repo.delete("del1").await.unwrap());
    assert_eq!(common::count_rows(&pool).await, 0);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = repository(pool);

    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
async fn test_closed_pool_is_store_unavailable(pool: PgPool) {
    pool.close().await;
    let repo = repository(pool);

    let result = repo.exists_by_short_code("abc").await;

    assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
}
