//! # HTTP Pricing Client
//!
//! reqwest-based implementation of [`PricingClient`].
//!
//! Talks to the pricing microservice's query endpoint:
//! `GET {base_url}/services/price?vehicleId={id}`. A `404` from the
//! service is its business answer for "no quote for this id" and maps to
//! [`QuoteLookup::NotPriced`]; timeouts, connection failures, server
//! errors, and unparseable bodies map to [`PricingError`] variants.
//!
//! # Examples
//!
//! ```no_run
//! use vehicle_catalog::infrastructure::pricing::{HttpPricingClient, PricingClient};
//! use vehicle_catalog::domain::value_objects::VehicleId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpPricingClient::new("http://localhost:8082", 2000)?;
//! let lookup = client.quote(VehicleId::new(42)).await?;
//! # Ok(())
//! # }
//! ```

use crate::domain::value_objects::{Price, PriceQuote, VehicleId};
use crate::infrastructure::pricing::error::{PricingError, PricingResult};
use crate::infrastructure::pricing::traits::{PricingClient, QuoteLookup};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Wire representation of a pricing service response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceResponse {
    currency: String,
    price: Decimal,
    #[serde(default)]
    vehicle_id: Option<u64>,
}

/// HTTP client for the remote pricing service.
#[derive(Debug, Clone)]
pub struct HttpPricingClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpPricingClient {
    /// Creates a client for the pricing service at `base_url`.
    ///
    /// Every request is bounded by `timeout_ms`; exceeding it is
    /// classified as [`PricingError::Timeout`], never an unbounded hang.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Internal`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> PricingResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                PricingError::internal(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Returns the configured request timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the pricing service base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn price_url(&self) -> String {
        format!("{}/services/price", self.base_url)
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> PricingError {
        if error.is_timeout() {
            PricingError::timeout_with_duration("pricing request timed out", self.timeout_ms)
        } else if error.is_connect() {
            PricingError::connection(format!("connection failed: {}", error))
        } else {
            PricingError::connection(format!("request failed: {}", error))
        }
    }

    fn map_status_error(&self, status: StatusCode, body: &str) -> PricingError {
        if status.is_server_error() {
            PricingError::connection(format!("pricing server error ({}): {}", status, body))
        } else {
            PricingError::protocol(format!("unexpected status ({}): {}", status, body))
        }
    }
}

#[async_trait]
impl PricingClient for HttpPricingClient {
    async fn quote(&self, vehicle_id: VehicleId) -> PricingResult<QuoteLookup> {
        let response = self
            .client
            .get(self.price_url())
            .query(&[("vehicleId", vehicle_id.get())])
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();

        // 404 is the service's business answer, not a transport failure.
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(vehicle_id = vehicle_id.get(), "no quote for vehicle");
            return Ok(QuoteLookup::NotPriced);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.map_status_error(status, &body));
        }

        let body: PriceResponse = response
            .json()
            .await
            .map_err(|e| PricingError::protocol(format!("failed to parse response: {}", e)))?;

        if let Some(echoed) = body.vehicle_id
            && echoed != vehicle_id.get()
        {
            return Err(PricingError::protocol(format!(
                "quote for vehicle {} returned in response to vehicle {}",
                echoed, vehicle_id
            )));
        }

        let amount = Price::new(body.price)
            .map_err(|e| PricingError::protocol(format!("invalid quoted amount: {}", e)))?;

        Ok(QuoteLookup::Found(PriceQuote::new(
            vehicle_id,
            body.currency,
            amount,
        )))
    }
}
