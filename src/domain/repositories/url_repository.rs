//! Repository trait for shortened URL data access.

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URLs.
///
/// Every operation is a single atomic statement. Concurrency control is left
/// to the store: unique constraints serialize competing inserts and the
/// access counter is bumped with one `UPDATE ... RETURNING`.
///
/// # Errors
///
/// All operations return [`AppError::StoreUnavailable`] on connection,
/// transport or deadline failures.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a mapping and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConstraintViolation`] if the URL or the short code
    /// is already present.
    async fn insert(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError>;

    /// Returns true if the original URL has already been shortened.
    async fn exists_by_url(&self, url: &str) -> Result<bool, AppError>;

    /// Returns true if the short code is taken.
    async fn exists_by_short_code(&self, code: &str) -> Result<bool, AppError>;

    /// Reads a mapping without touching its access counter.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Atomically increments `accessed` and returns the updated row.
    ///
    /// Returns `Ok(None)` if the code disappeared before the statement ran.
    async fn fetch_and_increment_access(
        &self,
        code: &str,
    ) -> Result<Option<ShortenedUrl>, AppError>;

    /// Replaces the original URL and bumps `updated_at`.
    ///
    /// Returns `Ok(None)` if no row matches `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConstraintViolation`] if `new_url` belongs to
    /// another mapping.
    async fn update(&self, code: &str, new_url: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Physically removes a mapping.
    ///
    /// Returns `Ok(false)` if no row matched.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Round-trips a trivial statement to confirm the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
