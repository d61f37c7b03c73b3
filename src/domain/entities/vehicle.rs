//! # Vehicle Entity
//!
//! The stored vehicle record and its unsaved draft form.
//!
//! A [`Vehicle`] pairs an immutable, store-assigned [`VehicleId`] with an
//! opaque set of descriptive attributes (make, model, year, condition,
//! mileage and so on). The stored record never carries a price: pricing
//! is a read-time enrichment layered on top by the aggregation service.
//!
//! # Examples
//!
//! ```
//! use vehicle_catalog::domain::entities::vehicle::{Vehicle, VehicleDraft};
//! use vehicle_catalog::domain::value_objects::VehicleId;
//! use serde_json::json;
//!
//! let draft = VehicleDraft::new()
//!     .with_attribute("make", json!("Toyota"))
//!     .with_attribute("model", json!("Corolla"));
//! assert!(draft.id().is_none());
//!
//! let vehicle = Vehicle::new(VehicleId::new(1), draft.into_attributes());
//! assert_eq!(vehicle.id(), VehicleId::new(1));
//! assert_eq!(vehicle.attribute("make"), Some(&json!("Toyota")));
//! ```

use crate::domain::value_objects::VehicleId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The descriptive attribute set of a vehicle.
///
/// Treated as an opaque key/value mapping; the validation service decides
/// which keys are required and what shapes their values must have.
pub type VehicleAttributes = BTreeMap<String, Value>;

/// A stored vehicle record.
///
/// The identifier is assigned by the store on creation and never changes.
/// Attributes are replaced wholesale on update, never merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    attributes: VehicleAttributes,
}

impl Vehicle {
    /// Creates a vehicle record with the given identifier and attributes.
    #[must_use]
    pub fn new(id: VehicleId, attributes: VehicleAttributes) -> Self {
        Self { id, attributes }
    }

    /// Returns the vehicle's identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> VehicleId {
        self.id
    }

    /// Returns the full attribute map.
    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> &VehicleAttributes {
        &self.attributes
    }

    /// Returns a single attribute value, if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Consumes the vehicle, returning its attribute map.
    #[must_use]
    pub fn into_attributes(self) -> VehicleAttributes {
        self.attributes
    }
}

/// An unsaved vehicle payload as submitted by a caller.
///
/// Carries no identifier for create requests; an identifier set via
/// [`VehicleDraft::with_id`] requests a full replace of that record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<VehicleId>,
    #[serde(default)]
    attributes: VehicleAttributes,
}

impl VehicleDraft {
    /// Creates an empty draft with no identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft from an attribute map, with no identifier.
    #[must_use]
    pub fn from_attributes(attributes: VehicleAttributes) -> Self {
        Self {
            id: None,
            attributes,
        }
    }

    /// Sets the target identifier, overriding any previously set.
    ///
    /// The aggregation service uses this to force the path identifier
    /// onto update payloads regardless of what the caller supplied.
    #[must_use]
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Adds a single attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Returns the draft's identifier, if any.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> Option<VehicleId> {
        self.id
    }

    /// Returns the draft's attribute map.
    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> &VehicleAttributes {
        &self.attributes
    }

    /// Consumes the draft, returning its attribute map.
    #[must_use]
    pub fn into_attributes(self) -> VehicleAttributes {
        self.attributes
    }
}

impl From<Vehicle> for VehicleDraft {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: Some(vehicle.id),
            attributes: vehicle.attributes,
        }
    }
}
