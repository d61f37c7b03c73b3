//! # Persistence Infrastructure
//!
//! Repository port and storage implementations.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryVehicleRepository;
pub use traits::{RepositoryError, RepositoryResult, VehicleRepository};
