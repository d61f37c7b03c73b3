//! # In-Memory Persistence
//!
//! In-memory repository implementation backing the vehicle store.

pub mod vehicle_repository;

pub use vehicle_repository::InMemoryVehicleRepository;
