//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`VehicleId`]: numeric vehicle identifier assigned by the store
//! - [`Price`]: non-negative decimal amount
//! - [`PriceQuote`]: per-request price for a specific vehicle

pub mod ids;
pub mod price;

pub use ids::VehicleId;
pub use price::{Price, PriceQuote};
