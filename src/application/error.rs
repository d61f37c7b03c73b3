//! # Application Errors
//!
//! Error types for aggregation service operations.
//!
//! The taxonomy the API surface translates into wire responses:
//!
//! ```text
//! ApplicationError
//! ├── VehicleNotFound        - requested id absent from storage (client error)
//! ├── Validation             - malformed write payload (client error)
//! ├── Domain(DomainError)    - domain invariant violation
//! ├── Repository(...)        - storage fault (server error)
//! └── Internal               - anything else unexpected (server error)
//! ```
//!
//! Deliberately absent: a pricing-failure variant. A degraded pricing
//! dependency is absorbed into a successful aggregation result as a
//! price status, never propagated as a failure of the vehicle read.

use crate::domain::errors::DomainError;
use crate::domain::services::validation::Violation;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Requested vehicle does not exist in storage.
    #[error("vehicle not found: {0}")]
    VehicleNotFound(VehicleId),

    /// Write payload failed validation.
    #[error("validation failed: {}", format_violations(.violations))]
    Validation {
        /// The individual violations, in attribute order.
        violations: Vec<Violation>,
    },

    /// Domain invariant violation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Storage fault.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Unexpected fault.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a vehicle not found error.
    #[must_use]
    pub fn vehicle_not_found(id: VehicleId) -> Self {
        Self::VehicleNotFound(id)
    }

    /// Creates a validation error from a violation list.
    #[must_use]
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation { violations }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VehicleNotFound(_))
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns the violation list for a validation error.
    #[must_use]
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::Validation { violations } => Some(violations),
            _ => None,
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
