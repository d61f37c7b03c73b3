//! # Pricing Client Port
//!
//! The sole gateway to the remote pricing service.
//!
//! [`PricingClient::quote`] surfaces three distinct outcomes:
//!
//! 1. `Ok(QuoteLookup::Found(_))` — the service answered with a quote;
//! 2. `Ok(QuoteLookup::NotPriced)` — the service answered and has no
//!    price for this vehicle, a normal business outcome;
//! 3. `Err(PricingError)` — the service could not be reached or could
//!    not be understood.
//!
//! Keeping (2) and (3) apart is the load-bearing contract of this port:
//! the aggregation service maps them to different client-visible price
//! statuses.

use crate::domain::value_objects::{PriceQuote, VehicleId};
use crate::infrastructure::pricing::error::PricingResult;
use async_trait::async_trait;
use std::fmt;

/// Outcome of a quote lookup that reached the pricing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteLookup {
    /// The service returned a quote for the vehicle.
    Found(PriceQuote),
    /// The service has no price for this vehicle. Not an error.
    NotPriced,
}

impl QuoteLookup {
    /// Returns the quote, if one was found.
    #[must_use]
    pub fn quote(&self) -> Option<&PriceQuote> {
        match self {
            Self::Found(quote) => Some(quote),
            Self::NotPriced => None,
        }
    }

    /// Returns true if a quote was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Client for the remote pricing service.
///
/// Implementations issue a single synchronous request per call, bounded
/// by a configured timeout. No batching, no caching.
#[async_trait]
pub trait PricingClient: Send + Sync + fmt::Debug {
    /// Requests a price quote for the given vehicle.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] only for transport-level failures;
    /// "no quote for this id" is reported as `Ok(QuoteLookup::NotPriced)`.
    ///
    /// [`PricingError`]: crate::infrastructure::pricing::error::PricingError
    async fn quote(&self, vehicle_id: VehicleId) -> PricingResult<QuoteLookup>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Price;
    use rust_decimal::Decimal;

    #[test]
    fn found_exposes_quote() {
        let price = Price::new(Decimal::new(18_500, 0)).unwrap();
        let lookup = QuoteLookup::Found(PriceQuote::new(VehicleId::new(42), "USD", price));
        assert!(lookup.is_found());
        assert_eq!(lookup.quote().unwrap().vehicle_id().get(), 42);
    }

    #[test]
    fn not_priced_has_no_quote() {
        let lookup = QuoteLookup::NotPriced;
        assert!(!lookup.is_found());
        assert!(lookup.quote().is_none());
    }
}
