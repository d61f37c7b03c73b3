//! # Price Types
//!
//! Value objects for read-time price enrichment.
//!
//! This module provides:
//! - [`Price`]: a validated, non-negative decimal amount
//! - [`PriceQuote`]: a price for a specific vehicle, valid only for the
//!   request that obtained it
//!
//! # Examples
//!
//! ```
//! use vehicle_catalog::domain::value_objects::{Price, PriceQuote, VehicleId};
//! use rust_decimal::Decimal;
//!
//! let price = Price::new(Decimal::new(18_500, 0)).unwrap();
//! let quote = PriceQuote::new(VehicleId::new(42), "USD", price);
//! assert_eq!(quote.vehicle_id(), VehicleId::new(42));
//! assert_eq!(quote.currency(), "USD");
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ids::VehicleId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
///
/// Quotes from the pricing service are never negative; a negative amount
/// in a response indicates a protocol-level fault upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativePrice`] if the amount is negative.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() {
            return Err(DomainError::NegativePrice(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price quote for a single vehicle.
///
/// Produced fresh on every read and discarded with the response. A quote
/// is never cached across requests and never persisted alongside the
/// vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// The vehicle this quote applies to.
    vehicle_id: VehicleId,
    /// ISO 4217 currency code, as reported by the pricing service.
    currency: String,
    /// Quoted amount.
    amount: Price,
}

impl PriceQuote {
    /// Creates a new price quote.
    #[must_use]
    pub fn new(vehicle_id: VehicleId, currency: impl Into<String>, amount: Price) -> Self {
        Self {
            vehicle_id,
            currency: currency.into(),
            amount,
        }
    }

    /// Returns the vehicle this quote applies to.
    #[inline]
    #[must_use]
    pub const fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the quoted amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Price {
        self.amount
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
