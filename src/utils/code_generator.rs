//! Short code generation.
//!
//! Two strategies are available behind the [`CodeGenerator`] trait:
//!
//! - [`RandomCodeGenerator`] samples uniformly from the 62-symbol alphanumeric
//!   charset.
//! - [`HashCodeGenerator`] truncates the SHA-256 hex digest of the URL on the
//!   first attempt and falls back to random sampling on every retry, so a
//!   truncated-hash collision never blocks creation.
//!
//! Generators never talk to storage. Uniqueness is checked by
//! [`crate::application::services::UrlService`] within a bounded retry budget.

use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Upper bound for any short code accepted on a path.
pub const MAX_CODE_LENGTH: usize = 64;

/// Codes that would shadow static routes.
pub const RESERVED_CODES: &[&str] = &["shorten", "health"];

/// Produces candidate short codes for a URL.
pub trait CodeGenerator: Send + Sync {
    /// Returns a candidate code for `url`.
    ///
    /// `attempt` starts at 0 and increases by one for every collision the
    /// caller observed for the same request.
    fn generate(&self, url: &str, attempt: usize) -> String;

    /// Length of the codes produced by this generator.
    fn length(&self) -> usize;
}

/// Uniform sampling over `[A-Za-z0-9]`.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, _url: &str, _attempt: usize) -> String {
        random_code(self.length)
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Truncated SHA-256 of the URL, random on retry.
#[derive(Debug, Clone)]
pub struct HashCodeGenerator {
    length: usize,
}

impl HashCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CodeGenerator for HashCodeGenerator {
    fn generate(&self, url: &str, attempt: usize) -> String {
        if attempt == 0 {
            hash_code(url, self.length)
        } else {
            random_code(self.length)
        }
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Code generation strategy selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStrategy {
    Random,
    Hash,
}

impl FromStr for CodeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "hash" => Ok(Self::Hash),
            other => Err(format!(
                "unknown short code strategy '{other}', expected 'random' or 'hash'"
            )),
        }
    }
}

impl fmt::Display for CodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::Hash => f.write_str("hash"),
        }
    }
}

/// Builds the generator for a configured strategy.
pub fn from_strategy(strategy: CodeStrategy, length: usize) -> Arc<dyn CodeGenerator> {
    match strategy {
        CodeStrategy::Random => Arc::new(RandomCodeGenerator::new(length)),
        CodeStrategy::Hash => Arc::new(HashCodeGenerator::new(length)),
    }
}

/// Returns true if `code` could have been produced by a generator.
///
/// Anything else is treated as unknown without querying the store.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

fn random_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn hash_code(url: &str, length: usize) -> String {
    let digest = hex::encode(Sha256::digest(url.as_bytes()));
    digest.chars().take(length).collect()
}
