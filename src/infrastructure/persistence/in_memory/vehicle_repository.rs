//! # In-Memory Vehicle Repository
//!
//! In-memory implementation of [`VehicleRepository`].
//!
//! Uses a thread-safe `BTreeMap` plus an atomic identifier sequence.
//! Iteration order is ascending identifier order. Identifiers move
//! strictly forward and are never reused after a delete.

use crate::domain::entities::vehicle::{Vehicle, VehicleAttributes};
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::persistence::traits::{RepositoryResult, VehicleRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-memory implementation of [`VehicleRepository`].
///
/// Suitable for tests and for running the service without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    storage: Arc<RwLock<BTreeMap<VehicleId, Vehicle>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryVehicleRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Clears all records.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }

    fn allocate_id(&self) -> VehicleId {
        VehicleId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Keeps the sequence ahead of externally supplied identifiers so a
    /// later insert cannot collide with an explicitly replaced record.
    fn observe_id(&self, id: VehicleId) {
        self.next_id.fetch_max(id.get(), Ordering::SeqCst);
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn insert(&self, attributes: VehicleAttributes) -> RepositoryResult<Vehicle> {
        let mut storage = self.storage.write().await;
        let id = self.allocate_id();
        let vehicle = Vehicle::new(id, attributes);
        storage.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn replace(&self, vehicle: &Vehicle) -> RepositoryResult<Vehicle> {
        let mut storage = self.storage.write().await;
        self.observe_id(vehicle.id());
        storage.insert(vehicle.id(), vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn get(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn delete(&self, id: VehicleId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(&id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(make: &str) -> VehicleAttributes {
        let mut attrs = VehicleAttributes::new();
        attrs.insert("make".to_string(), json!(make));
        attrs
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryVehicleRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let repo = InMemoryVehicleRepository::new();
        let first = repo.insert(attrs("Toyota")).await.unwrap();
        let second = repo.insert(attrs("Honda")).await.unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn insert_then_get_round_trips_attributes() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.insert(attrs("Toyota")).await.unwrap();

        let fetched = repo.get(saved.id()).await.unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(fetched.attribute("make"), Some(&json!("Toyota")));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryVehicleRepository::new();
        assert!(repo.get(VehicleId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_overwrites_attributes_in_full() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.insert(attrs("Toyota")).await.unwrap();

        let replacement = Vehicle::new(saved.id(), attrs("Honda"));
        repo.replace(&replacement).await.unwrap();

        let fetched = repo.get(saved.id()).await.unwrap().unwrap();
        assert_eq!(fetched.attribute("make"), Some(&json!("Honda")));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn replace_at_unknown_id_inserts() {
        let repo = InMemoryVehicleRepository::new();
        let vehicle = Vehicle::new(VehicleId::new(10), attrs("Ford"));
        repo.replace(&vehicle).await.unwrap();
        assert!(repo.get(VehicleId::new(10)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn insert_never_collides_with_replaced_id() {
        let repo = InMemoryVehicleRepository::new();
        let vehicle = Vehicle::new(VehicleId::new(10), attrs("Ford"));
        repo.replace(&vehicle).await.unwrap();

        let inserted = repo.insert(attrs("Mazda")).await.unwrap();
        assert!(inserted.id().get() > 10);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.insert(attrs("Toyota")).await.unwrap();

        assert!(repo.delete(saved.id()).await.unwrap());
        assert!(repo.get(saved.id()).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_nonexistent_reports_false() {
        let repo = InMemoryVehicleRepository::new();
        assert!(!repo.delete(VehicleId::new(100)).await.unwrap());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = InMemoryVehicleRepository::new();
        let first = repo.insert(attrs("Toyota")).await.unwrap();
        repo.delete(first.id()).await.unwrap();

        let second = repo.insert(attrs("Honda")).await.unwrap();
        assert_ne!(second.id(), first.id());
    }

    #[tokio::test]
    async fn get_all_iterates_in_id_order() {
        let repo = InMemoryVehicleRepository::new();
        repo.replace(&Vehicle::new(VehicleId::new(3), attrs("C")))
            .await
            .unwrap();
        repo.replace(&Vehicle::new(VehicleId::new(1), attrs("A")))
            .await
            .unwrap();
        repo.replace(&Vehicle::new(VehicleId::new(2), attrs("B")))
            .await
            .unwrap();

        let ids: Vec<u64> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|v| v.id().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn clear_empties_storage() {
        let repo = InMemoryVehicleRepository::new();
        repo.insert(attrs("Toyota")).await.unwrap();
        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
