//! # Repository Traits
//!
//! Port definition for vehicle storage.
//!
//! The [`VehicleRepository`] trait abstracts the keyed vehicle store so
//! the aggregation service can be wired against any backend. The crate
//! ships an in-memory implementation; a database-backed one would
//! implement the same trait.

use crate::domain::entities::vehicle::{Vehicle, VehicleAttributes};
use crate::domain::value_objects::VehicleId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Keyed storage for vehicle records.
///
/// Single-record operations are atomic with respect to each other:
/// concurrent writers to the same identifier resolve last-writer-wins,
/// never a half-written record. Iteration order of [`get_all`] is the
/// store's own and is otherwise unspecified.
///
/// [`get_all`]: VehicleRepository::get_all
#[async_trait]
pub trait VehicleRepository: Send + Sync + fmt::Debug {
    /// Creates a new record, assigning a fresh identifier.
    ///
    /// The assigned identifier is never one of a live record and deleted
    /// identifiers are not reused, so a create can never resurrect
    /// deleted data.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the record cannot be stored.
    async fn insert(&self, attributes: VehicleAttributes) -> RepositoryResult<Vehicle>;

    /// Stores a record under its identifier, replacing any existing
    /// attributes in full.
    ///
    /// Inserts the record if no record with that identifier exists.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the record cannot be stored.
    async fn replace(&self, vehicle: &Vehicle) -> RepositoryResult<Vehicle>;

    /// Gets a record by identifier.
    ///
    /// Returns `None` if the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store cannot be read.
    async fn get(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>>;

    /// Gets all records in store iteration order.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store cannot be read.
    async fn get_all(&self) -> RepositoryResult<Vec<Vehicle>>;

    /// Deletes a record by identifier.
    ///
    /// Returns `Ok(true)` if the record was deleted, `Ok(false)` if it
    /// did not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store cannot be written.
    async fn delete(&self, id: VehicleId) -> RepositoryResult<bool>;

    /// Counts all records.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store cannot be read.
    async fn count(&self) -> RepositoryResult<u64>;
}
