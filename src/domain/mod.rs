//! # Domain Layer
//!
//! Entities, value objects, and domain services for the vehicle catalog.
//!
//! This layer has no knowledge of HTTP, storage backends, or the remote
//! pricing service; those concerns live in the infrastructure layer and
//! are orchestrated by the application layer.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
