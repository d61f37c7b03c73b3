//! # Domain Entities
//!
//! Entities with identity and lifecycle.

pub mod vehicle;

pub use vehicle::{Vehicle, VehicleAttributes, VehicleDraft};
