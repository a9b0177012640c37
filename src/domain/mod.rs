//! Domain layer containing the business entity and the storage contract.
//!
//! - [`entities`] - The persisted short URL record
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
