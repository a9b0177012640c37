//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. The PostgreSQL
//! implementation lives in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
