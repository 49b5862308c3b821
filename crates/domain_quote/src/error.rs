//! Quote domain errors
//!
//! The rating core itself cannot fail; these errors come from validating
//! requests and explanation lookups before the core is invoked.

use thiserror::Error;

/// Errors that can occur in the quoting domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// One or more request fields are out of range or outside their catalog
    #[error("Invalid quote request: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A coverage tier label outside the catalog was asked about
    #[error("Unknown coverage level: {0}")]
    UnknownCoverageLevel(String),
}

impl QuoteError {
    /// Individual violation messages, empty for non-validation errors
    pub fn details(&self) -> Vec<String> {
        match self {
            QuoteError::Validation(errors) => errors.clone(),
            QuoteError::UnknownCoverageLevel(_) => Vec::new(),
        }
    }
}
