//! # Infrastructure Layer
//!
//! Adapters for external systems: the vehicle store and the remote
//! pricing service.

pub mod persistence;
pub mod pricing;
