//! # Domain Errors
//!
//! Error types for domain-level invariant violations.

use thiserror::Error;

/// Error type for domain invariant violations.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A price amount was negative.
    #[error("negative price: {0}")]
    NegativePrice(String),

    /// An attribute value violated a domain constraint.
    #[error("invalid attribute {field}: {message}")]
    InvalidAttribute {
        /// Attribute name.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

impl DomainError {
    /// Creates an invalid attribute error.
    #[must_use]
    pub fn invalid_attribute(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
