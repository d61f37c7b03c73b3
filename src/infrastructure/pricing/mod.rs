//! # Pricing Infrastructure
//!
//! Port and HTTP adapter for the remote pricing service.

pub mod error;
pub mod http_client;
pub mod traits;

pub use error::{PricingError, PricingResult};
pub use http_client::HttpPricingClient;
pub use traits::{PricingClient, QuoteLookup};
