//! PostgreSQL implementation of the shortened URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Deadline applied to a single statement when none is configured.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Row shape shared by every `RETURNING` / `SELECT` below.
#[derive(Debug, FromRow)]
struct ShortenedUrlRow {
    id: i64,
    url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    accessed: i64,
}

impl From<ShortenedUrlRow> for ShortenedUrl {
    fn from(row: ShortenedUrlRow) -> Self {
        ShortenedUrl::new(
            row.id,
            row.url,
            row.short_code,
            row.created_at,
            row.updated_at,
            row.accessed,
        )
    }
}

/// PostgreSQL repository for shortened URLs.
///
/// Every statement runs under a per-call deadline; an elapsed deadline is
/// reported as [`AppError::StoreUnavailable`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgUrlRepository {
    /// Creates a new repository with a connection pool and statement deadline.
    pub fn new(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn with_deadline<T, F>(&self, operation: &'static str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "store call exceeded deadline"
                );
                Err(AppError::StoreUnavailable(format!(
                    "{operation} exceeded {}ms deadline",
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let row = self
            .with_deadline(
                "insert",
                sqlx::query_as::<_, ShortenedUrlRow>(
                    r#"
                    INSERT INTO shortened (url, short_code)
                    VALUES ($1, $2)
                    RETURNING id, url, short_code, created_at, updated_at, accessed
                    "#,
                )
                .bind(&new_url.url)
                .bind(&new_url.short_code)
                .fetch_one(self.pool.as_ref()),
            )
            .await?;

        Ok(row.into())
    }

    async fn exists_by_url(&self, url: &str) -> Result<bool, AppError> {
        self.with_deadline(
            "exists_by_url",
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM shortened WHERE url = $1)",
            )
            .bind(url)
            .fetch_one(self.pool.as_ref()),
        )
        .await
    }

    async fn exists_by_short_code(&self, code: &str) -> Result<bool, AppError> {
        self.with_deadline(
            "exists_by_short_code",
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM shortened WHERE short_code = $1)",
            )
            .bind(code)
            .fetch_one(self.pool.as_ref()),
        )
        .await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let row = self
            .with_deadline(
                "find_by_code",
                sqlx::query_as::<_, ShortenedUrlRow>(
                    r#"
                    SELECT id, url, short_code, created_at, updated_at, accessed
                    FROM shortened
                    WHERE short_code = $1
                    "#,
                )
                .bind(code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Into::into))
    }

    async fn fetch_and_increment_access(
        &self,
        code: &str,
    ) -> Result<Option<ShortenedUrl>, AppError> {
        let row = self
            .with_deadline(
                "fetch_and_increment_access",
                sqlx::query_as::<_, ShortenedUrlRow>(
                    r#"
                    UPDATE shortened
                    SET accessed = accessed + 1
                    WHERE short_code = $1
                    RETURNING id, url, short_code, created_at, updated_at, accessed
                    "#,
                )
                .bind(code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, code: &str, new_url: &str) -> Result<Option<ShortenedUrl>, AppError> {
        // GREATEST keeps updated_at >= created_at under clock skew.
        let row = self
            .with_deadline(
                "update",
                sqlx::query_as::<_, ShortenedUrlRow>(
                    r#"
                    UPDATE shortened
                    SET url = $2, updated_at = GREATEST(NOW(), created_at)
                    WHERE short_code = $1
                    RETURNING id, url, short_code, created_at, updated_at, accessed
                    "#,
                )
                .bind(code)
                .bind(new_url)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = self
            .with_deadline(
                "delete",
                sqlx::query("DELETE FROM shortened WHERE short_code = $1")
                    .bind(code)
                    .execute(self.pool.as_ref()),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.with_deadline(
            "ping",
            sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}
