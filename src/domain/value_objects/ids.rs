//! # Identifier Types
//!
//! Strongly-typed identifiers for domain entities.
//!
//! # Examples
//!
//! ```
//! use vehicle_catalog::domain::value_objects::VehicleId;
//!
//! let id = VehicleId::new(42);
//! assert_eq!(id.get(), 42);
//! assert_eq!(id.to_string(), "42");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a vehicle record.
///
/// Assigned by the vehicle store on creation and immutable thereafter.
/// The numeric value is opaque to callers; only equality and ordering
/// are meaningful.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct VehicleId(u64);

impl VehicleId {
    /// Creates a vehicle identifier from its numeric value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this identifier.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for VehicleId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}
