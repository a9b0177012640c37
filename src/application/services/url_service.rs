//! Short URL lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved, is_valid_code};
use crate::utils::db_error::is_short_code_violation;
use crate::utils::url_validator::validate_url;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for creating, resolving and managing shortened URLs.
///
/// Holds no mutable state. Competing requests are serialized by the store's
/// unique constraints and atomic updates.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens a URL.
    ///
    /// # Code Generation
    ///
    /// Candidates come from the configured [`CodeGenerator`]. A candidate is
    /// discarded if it is reserved, already taken, or loses an insert race on
    /// the short code constraint. After `max_attempts` discarded candidates
    /// the call fails.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is malformed
    /// - [`AppError::Conflict`] if the URL has already been shortened
    /// - [`AppError::CodeSpaceExhausted`] if no free code was found
    /// - [`AppError::ConstraintViolation`] if a concurrent request inserted the same URL
    pub async fn create(&self, url: &str) -> Result<ShortenedUrl, AppError> {
        let url = validate_url(url).map_err(|e| {
            tracing::warn!(operation = "create", url, error = %e, "rejected URL");
            AppError::bad_request(e.to_string())
        })?;

        if self.repository.exists_by_url(url).await? {
            tracing::warn!(operation = "create", url, "URL already shortened");
            return Err(AppError::conflict("URL already shortened"));
        }

        for attempt in 0..self.max_attempts {
            let short_code = self.generator.generate(url, attempt);

            if is_reserved(&short_code) || self.repository.exists_by_short_code(&short_code).await?
            {
                tracing::debug!(attempt, short_code = %short_code, "short code collision");
                continue;
            }

            let new_url = NewShortenedUrl {
                url: url.to_string(),
                short_code,
            };

            match self.repository.insert(new_url).await {
                Ok(record) => {
                    tracing::info!(
                        operation = "create",
                        short_code = %record.short_code,
                        url = %record.url,
                        "short URL created"
                    );
                    return Ok(record);
                }
                Err(AppError::ConstraintViolation { constraint })
                    if is_short_code_violation(&constraint) =>
                {
                    tracing::debug!(attempt, "short code taken by a concurrent insert");
                }
                Err(e) => {
                    tracing::error!(operation = "create", url, error = %e, "insert failed");
                    return Err(e);
                }
            }
        }

        tracing::error!(
            operation = "create",
            url,
            attempts = self.max_attempts,
            "short code space exhausted"
        );
        Err(AppError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code and counts the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve(&self, code: &str) -> Result<ShortenedUrl, AppError> {
        self.ensure_exists("resolve", code).await?;

        self.repository
            .fetch_and_increment_access(code)
            .await?
            .ok_or_else(|| not_found("resolve", code))
    }

    /// Points an existing short code at a new URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the new URL is malformed
    /// - [`AppError::NotFound`] if the code is unknown
    /// - [`AppError::Conflict`] if the new URL belongs to another short code
    pub async fn update(&self, code: &str, new_url: &str) -> Result<ShortenedUrl, AppError> {
        let new_url = validate_url(new_url).map_err(|e| {
            tracing::warn!(operation = "update", short_code = code, error = %e, "rejected URL");
            AppError::bad_request(e.to_string())
        })?;

        let current = self.find("update", code).await?;

        if current.url != new_url && self.repository.exists_by_url(new_url).await? {
            tracing::warn!(
                operation = "update",
                short_code = code,
                url = new_url,
                "URL already shortened"
            );
            return Err(AppError::conflict("URL already shortened"));
        }

        let record = self
            .repository
            .update(code, new_url)
            .await?
            .ok_or_else(|| not_found("update", code))?;

        tracing::info!(operation = "update", short_code = code, url = new_url, "short URL updated");
        if !record.was_updated() {
            tracing::debug!(
                short_code = code,
                updated_at = %record.updated_at,
                "updated_at did not advance past created_at"
            );
        }
        Ok(record)
    }

    /// Physically removes a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        self.ensure_exists("delete", code).await?;

        if !self.repository.delete(code).await? {
            return Err(not_found("delete", code));
        }

        tracing::info!(operation = "delete", short_code = code, "short URL deleted");
        Ok(())
    }

    /// Returns the record for a short code without counting an access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn stats(&self, code: &str) -> Result<ShortenedUrl, AppError> {
        self.find("stats", code).await
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn ensure_exists(&self, operation: &'static str, code: &str) -> Result<(), AppError> {
        if !is_valid_code(code) || !self.repository.exists_by_short_code(code).await? {
            return Err(not_found(operation, code));
        }
        Ok(())
    }

    async fn find(&self, operation: &'static str, code: &str) -> Result<ShortenedUrl, AppError> {
        if !is_valid_code(code) {
            return Err(not_found(operation, code));
        }

        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(operation, code))
    }
}

fn not_found(operation: &'static str, code: &str) -> AppError {
    tracing::warn!(operation, short_code = code, "short code not found");
    AppError::not_found("Short code not found")
}
