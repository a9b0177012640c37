//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A persisted URL-to-short-code mapping
//! - [`NewShortenedUrl`] - Input for inserting a new mapping

pub mod shortened_url;

pub use shortened_url::{NewShortenedUrl, ShortenedUrl};
