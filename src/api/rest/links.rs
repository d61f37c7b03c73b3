//! # Resource Links
//!
//! Explicit link builders constructing resource URIs from the route
//! templates registered in [`routes`](crate::api::rest::routes).
//!
//! Replaces framework-generated hypermedia links with plain functions;
//! the `Location` header on create responses is built here.

use crate::domain::value_objects::VehicleId;

/// Route template for the vehicle collection.
pub const VEHICLES_PATH: &str = "/vehicles";

/// Returns the URI of a single vehicle resource.
#[must_use]
pub fn vehicle_uri(id: VehicleId) -> String {
    format!("{}/{}", VEHICLES_PATH, id)
}
