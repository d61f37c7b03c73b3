//! # Vehicle Aggregation Service
//!
//! Orchestrates the vehicle store and the pricing client to produce
//! complete vehicle views.
//!
//! Read paths fetch the stored record and enrich it with a live quote
//! from the pricing service. Enrichment is best effort: pricing is an
//! independent subsystem whose degradation must never mask the existence
//! of a vehicle. The outcome of the enrichment step is reported through
//! [`PriceStatus`]:
//!
//! - [`PriceStatus::Priced`] — the pricing service returned a quote;
//! - [`PriceStatus::PriceUnavailable`] — the service answered and has no
//!   price for this vehicle (a normal business outcome, not a failure);
//! - [`PriceStatus::PriceServiceUnreachable`] — the service timed out or
//!   could not be reached; the vehicle is still returned.
//!
//! Write paths gate on explicit validation and delegate to the store.
//!
//! # Examples
//!
//! ```
//! use vehicle_catalog::application::services::vehicle_aggregation::{
//!     AggregationConfig, VehicleAggregationService,
//! };
//! # use vehicle_catalog::infrastructure::persistence::InMemoryVehicleRepository;
//! # use vehicle_catalog::infrastructure::pricing::{PricingClient, QuoteLookup};
//! # use vehicle_catalog::infrastructure::pricing::error::PricingResult;
//! # use vehicle_catalog::domain::value_objects::VehicleId;
//! # use std::sync::Arc;
//! # #[derive(Debug)]
//! # struct NoopPricing;
//! # #[async_trait::async_trait]
//! # impl PricingClient for NoopPricing {
//! #     async fn quote(&self, _id: VehicleId) -> PricingResult<QuoteLookup> {
//! #         Ok(QuoteLookup::NotPriced)
//! #     }
//! # }
//!
//! let service = VehicleAggregationService::new(
//!     Arc::new(InMemoryVehicleRepository::new()),
//!     Arc::new(NoopPricing),
//!     AggregationConfig::default(),
//! );
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::vehicle::{Vehicle, VehicleDraft};
use crate::domain::services::validation::VehicleValidator;
use crate::domain::value_objects::{PriceQuote, VehicleId};
use crate::infrastructure::persistence::VehicleRepository;
use crate::infrastructure::pricing::{PricingClient, QuoteLookup};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Configuration for price enrichment.
#[derive(Debug, Clone)]
pub struct AggregationConfig {
    /// Upper bound on a single quote lookup in milliseconds. Applied per
    /// vehicle; in a list operation one slow lookup delays only itself.
    pub quote_timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            quote_timeout_ms: 2000,
        }
    }
}

impl AggregationConfig {
    /// Creates a configuration with the given per-quote timeout.
    #[must_use]
    pub fn with_quote_timeout(quote_timeout_ms: u64) -> Self {
        Self { quote_timeout_ms }
    }
}

/// Outcome of the price enrichment step for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceStatus {
    /// A quote was obtained and attached.
    Priced,
    /// The pricing service has no price for this vehicle.
    PriceUnavailable,
    /// The pricing service could not be reached in time.
    PriceServiceUnreachable,
}

impl PriceStatus {
    /// Returns true if a quote was attached.
    #[inline]
    #[must_use]
    pub const fn is_priced(&self) -> bool {
        matches!(self, Self::Priced)
    }

    /// Returns true if the pricing dependency was degraded.
    #[inline]
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::PriceServiceUnreachable)
    }
}

impl fmt::Display for PriceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Priced => "PRICED",
            Self::PriceUnavailable => "PRICE_UNAVAILABLE",
            Self::PriceServiceUnreachable => "PRICE_SERVICE_UNREACHABLE",
        };
        write!(f, "{}", s)
    }
}

/// A vehicle record combined with the outcome of price enrichment.
///
/// Constructed per request and discarded with the response. The quote is
/// present exactly when the status is [`PriceStatus::Priced`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedVehicle {
    vehicle: Vehicle,
    status: PriceStatus,
    quote: Option<PriceQuote>,
}

impl AggregatedVehicle {
    /// Creates a priced result.
    #[must_use]
    pub fn priced(vehicle: Vehicle, quote: PriceQuote) -> Self {
        Self {
            vehicle,
            status: PriceStatus::Priced,
            quote: Some(quote),
        }
    }

    /// Creates a result for a vehicle the pricing service has no price for.
    #[must_use]
    pub fn unpriced(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            status: PriceStatus::PriceUnavailable,
            quote: None,
        }
    }

    /// Creates a result for a vehicle whose quote lookup failed at the
    /// transport level.
    #[must_use]
    pub fn degraded(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            status: PriceStatus::PriceServiceUnreachable,
            quote: None,
        }
    }

    /// Returns the vehicle record.
    #[inline]
    #[must_use]
    pub const fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the enrichment status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> PriceStatus {
        self.status
    }

    /// Returns the attached quote, if any.
    #[inline]
    #[must_use]
    pub const fn quote(&self) -> Option<&PriceQuote> {
        self.quote.as_ref()
    }

    /// Consumes the result, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vehicle, PriceStatus, Option<PriceQuote>) {
        (self.vehicle, self.status, self.quote)
    }
}

/// The composition core: turns raw vehicle storage into externally
/// complete vehicle views, and vice versa for writes.
#[derive(Debug)]
pub struct VehicleAggregationService {
    repository: Arc<dyn VehicleRepository>,
    pricing: Arc<dyn PricingClient>,
    validator: VehicleValidator,
    config: AggregationConfig,
}

impl VehicleAggregationService {
    /// Creates a new aggregation service over the given collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        pricing: Arc<dyn PricingClient>,
        config: AggregationConfig,
    ) -> Self {
        Self {
            repository,
            pricing,
            validator: VehicleValidator::default(),
            config,
        }
    }

    /// Replaces the default payload validator.
    #[must_use]
    pub fn with_validator(mut self, validator: VehicleValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Fetches one vehicle and enriches it with a live quote.
    ///
    /// Pricing degradation is absorbed into the result's status; only the
    /// vehicle's absence fails the read.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::VehicleNotFound`] if no record with
    /// this id exists, or a repository error if storage fails.
    pub async fn get(&self, id: VehicleId) -> ApplicationResult<AggregatedVehicle> {
        let vehicle = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::vehicle_not_found(id))?;

        Ok(self.enrich(vehicle).await)
    }

    /// Fetches all vehicles, enriching each independently.
    ///
    /// Quote lookups are issued concurrently and joined preserving store
    /// iteration order. One vehicle's pricing failure never aborts or
    /// delays another's enrichment beyond its own timeout bound.
    ///
    /// # Errors
    ///
    /// Returns a repository error if storage fails. Pricing failures are
    /// absorbed per item.
    pub async fn list(&self) -> ApplicationResult<Vec<AggregatedVehicle>> {
        let vehicles = self.repository.get_all().await?;

        let enriched =
            futures::future::join_all(vehicles.into_iter().map(|v| self.enrich(v))).await;

        Ok(enriched)
    }

    /// Persists a vehicle draft.
    ///
    /// A draft without an identifier creates a new record; a draft with
    /// one replaces that record's attributes in full. The returned
    /// vehicle is the authoritative stored state, never carrying a price.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] if the payload fails the
    /// validation gate, or a repository error if storage fails.
    pub async fn save(&self, draft: VehicleDraft) -> ApplicationResult<Vehicle> {
        let violations = self.validator.validate(draft.attributes());
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "rejecting invalid vehicle payload");
            return Err(ApplicationError::validation(violations));
        }

        let saved = match draft.id() {
            None => self.repository.insert(draft.into_attributes()).await?,
            Some(id) => {
                let vehicle = Vehicle::new(id, draft.into_attributes());
                self.repository.replace(&vehicle).await?
            }
        };

        tracing::info!(vehicle_id = saved.id().get(), "vehicle saved");
        Ok(saved)
    }

    /// Replaces the vehicle at `id` with the draft's attributes.
    ///
    /// The target identifier is forced onto the draft, overriding
    /// anything the caller supplied. Updating a nonexistent id creates
    /// the record (permissive upsert).
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] if the payload fails the
    /// validation gate, or a repository error if storage fails.
    pub async fn update(&self, id: VehicleId, draft: VehicleDraft) -> ApplicationResult<Vehicle> {
        self.save(draft.with_id(id)).await
    }

    /// Deletes the vehicle at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::VehicleNotFound`] if no record with
    /// this id exists, or a repository error if storage fails.
    pub async fn delete(&self, id: VehicleId) -> ApplicationResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(ApplicationError::vehicle_not_found(id));
        }

        tracing::info!(vehicle_id = id.get(), "vehicle deleted");
        Ok(())
    }

    /// Attaches a quote outcome to a stored vehicle.
    ///
    /// Classification: a found quote is PRICED, a business "no quote"
    /// answer is PRICE_UNAVAILABLE, and any transport failure — client
    /// error, elapsed timeout — is PRICE_SERVICE_UNREACHABLE.
    async fn enrich(&self, vehicle: Vehicle) -> AggregatedVehicle {
        let id = vehicle.id();
        let bound = Duration::from_millis(self.config.quote_timeout_ms);

        match timeout(bound, self.pricing.quote(id)).await {
            Ok(Ok(QuoteLookup::Found(quote))) => AggregatedVehicle::priced(vehicle, quote),
            Ok(Ok(QuoteLookup::NotPriced)) => AggregatedVehicle::unpriced(vehicle),
            Ok(Err(e)) => {
                tracing::warn!(vehicle_id = id.get(), error = %e, "pricing service degraded");
                AggregatedVehicle::degraded(vehicle)
            }
            Err(_) => {
                tracing::warn!(
                    vehicle_id = id.get(),
                    timeout_ms = self.config.quote_timeout_ms,
                    "quote lookup exceeded timeout"
                );
                AggregatedVehicle::degraded(vehicle)
            }
        }
    }
}
