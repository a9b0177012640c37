//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses as
//! JSON records or redirects.
//!
//! - [`dto`] - Request/response serialization
//! - [`extract`] - JSON extractor with uniform error bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
