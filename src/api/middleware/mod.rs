//! HTTP middleware for request processing.
//!
//! Provides observability and cross-origin layers.

pub mod cors;
pub mod tracing;
