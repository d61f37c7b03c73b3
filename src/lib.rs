//! # Vehicle Catalog
//!
//! A catalog of vehicle records served over HTTP, where each vehicle's
//! full representation is assembled at read time by combining the stored
//! record with a live quote from an independent pricing microservice.
//!
//! The interesting part is the composition layer,
//! [`VehicleAggregationService`]: pricing is a best-effort enrichment,
//! and its degradation is reported through a per-vehicle price status
//! instead of failing the read. A vehicle lookup succeeds whenever the
//! vehicle exists, with the price present, absent by business answer, or
//! absent by service outage — three outcomes callers can tell apart.
//!
//! # Architecture
//!
//! - [`domain`] — entities, value objects, validation
//! - [`application`] — the aggregation service and error taxonomy
//! - [`infrastructure`] — the vehicle store and the pricing client
//! - [`api`] — the axum REST surface
//! - [`config`] — layered settings
//!
//! [`VehicleAggregationService`]: application::services::VehicleAggregationService

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
