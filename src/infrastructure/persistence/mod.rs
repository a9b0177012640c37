//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! parameterized statements.
//!
//! - [`PgUrlRepository`] - Shortened URL storage, lookup and access counting

pub mod pg_url_repository;

pub use pg_url_repository::{DEFAULT_STORE_TIMEOUT, PgUrlRepository};
