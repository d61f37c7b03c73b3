//! # Pricing Errors
//!
//! Transport-level error types for the pricing service client.
//!
//! These errors cover only communication failures: timeouts, connection
//! problems, server faults, and malformed responses. The business-level
//! answer "no quote for this vehicle" is **not** an error; it is the
//! `NotPriced` arm of [`QuoteLookup`]. Collapsing the two would destroy
//! the aggregation service's ability to distinguish a vehicle the
//! pricing service has no price for from a pricing service that is down.
//!
//! [`QuoteLookup`]: crate::infrastructure::pricing::traits::QuoteLookup
//!
//! # Examples
//!
//! ```
//! use vehicle_catalog::infrastructure::pricing::error::PricingError;
//!
//! let error = PricingError::timeout("request exceeded 2000ms");
//! assert!(error.is_retryable());
//!
//! let error = PricingError::protocol("response body was not JSON");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for pricing service communication failures.
#[derive(Debug, Clone, Error)]
pub enum PricingError {
    /// Request timed out.
    #[error("pricing timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds, if known.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error, including upstream server faults.
    #[error("pricing connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The pricing service answered with something this client cannot
    /// interpret: unexpected status or a malformed body.
    #[error("pricing protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Client-side fault, for example a request that could not be built.
    #[error("pricing internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl PricingError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with the configured duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result type for pricing client operations.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = PricingError::timeout("test");
        assert!(error.is_retryable());
        assert!(error.is_timeout());
    }

    #[test]
    fn timeout_with_duration_keeps_duration() {
        let error = PricingError::timeout_with_duration("test", 2000);
        assert!(matches!(
            error,
            PricingError::Timeout {
                timeout_ms: Some(2000),
                ..
            }
        ));
    }

    #[test]
    fn connection_is_retryable() {
        let error = PricingError::connection("refused");
        assert!(error.is_retryable());
        assert!(!error.is_timeout());
    }

    #[test]
    fn protocol_is_not_retryable() {
        let error = PricingError::protocol("bad body");
        assert!(!error.is_retryable());
    }

    #[test]
    fn internal_is_not_retryable() {
        let error = PricingError::internal("client build failed");
        assert!(!error.is_retryable());
    }

    #[test]
    fn display_format() {
        let error = PricingError::timeout("request timed out");
        let display = error.to_string();
        assert!(display.contains("timeout"));
        assert!(display.contains("request timed out"));
    }
}
