//! Helpers shared by the service and API layers.
//!
//! - [`code_generator`] - Short code generation strategies
//! - [`url_validator`] - Redirect target validation
//! - [`db_error`] - Unique-violation inspection for SQLx errors

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
