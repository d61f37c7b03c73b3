//! # Vehicle Validation
//!
//! Explicit payload validation invoked before every write.
//!
//! Replaces implicit framework constraint checking with a plain function:
//! [`VehicleValidator::validate`] inspects a draft's attribute map and
//! returns a structured list of [`Violation`]s. An empty list means the
//! payload is acceptable; the aggregation service treats any non-empty
//! list as a validation failure and never reaches the store.
//!
//! # Examples
//!
//! ```
//! use vehicle_catalog::domain::services::validation::VehicleValidator;
//! use vehicle_catalog::domain::entities::vehicle::VehicleDraft;
//! use serde_json::json;
//!
//! let validator = VehicleValidator::default();
//! let draft = VehicleDraft::new()
//!     .with_attribute("make", json!("Toyota"))
//!     .with_attribute("model", json!("Corolla"))
//!     .with_attribute("year", json!(2020));
//!
//! assert!(validator.validate(draft.attributes()).is_empty());
//! ```

use crate::domain::entities::vehicle::VehicleAttributes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Earliest model year accepted (the Benz Patent-Motorwagen is from 1886).
const MIN_YEAR: i64 = 1886;

/// Latest model year accepted, allowing next-model-year listings.
const MAX_YEAR: i64 = 2100;

/// A single validation failure for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The attribute at fault.
    pub field: String,
    /// What was wrong with it.
    pub message: String,
}

impl Violation {
    /// Creates a violation for the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Pass/fail gate for vehicle write payloads.
///
/// Checks that required attributes are present and that well-known
/// attributes have sensible shapes. Unknown attributes pass through
/// untouched; the attribute set is otherwise opaque.
#[derive(Debug, Clone)]
pub struct VehicleValidator {
    required: Vec<String>,
}

impl Default for VehicleValidator {
    fn default() -> Self {
        Self {
            required: vec!["make".to_string(), "model".to_string(), "year".to_string()],
        }
    }
}

impl VehicleValidator {
    /// Creates a validator requiring the given attribute keys.
    #[must_use]
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }

    /// Returns the required attribute keys.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Validates an attribute map, returning all violations found.
    ///
    /// An empty result means the payload passed.
    #[must_use]
    pub fn validate(&self, attributes: &VehicleAttributes) -> Vec<Violation> {
        let mut violations = Vec::new();

        for key in &self.required {
            match attributes.get(key) {
                None | Some(Value::Null) => {
                    violations.push(Violation::new(key.clone(), "is required"));
                }
                Some(Value::String(s)) if s.trim().is_empty() => {
                    violations.push(Violation::new(key.clone(), "must not be blank"));
                }
                Some(_) => {}
            }
        }

        if let Some(year) = attributes.get("year") {
            match year.as_i64() {
                Some(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => {}
                Some(_) => violations.push(Violation::new(
                    "year",
                    format!("must be between {} and {}", MIN_YEAR, MAX_YEAR),
                )),
                None => violations.push(Violation::new("year", "must be an integer")),
            }
        }

        if let Some(mileage) = attributes.get("mileage") {
            match mileage.as_i64() {
                Some(m) if m >= 0 => {}
                Some(_) => violations.push(Violation::new("mileage", "must not be negative")),
                None => violations.push(Violation::new("mileage", "must be an integer")),
            }
        }

        if let Some(condition) = attributes.get("condition") {
            let ok = condition
                .as_str()
                .is_some_and(|c| matches!(c, "NEW" | "USED"));
            if !ok {
                violations.push(Violation::new("condition", "must be NEW or USED"));
            }
        }

        violations
    }
}
