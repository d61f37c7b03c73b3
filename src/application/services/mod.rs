//! # Application Services
//!
//! Use-case orchestration over the domain and infrastructure layers.

pub mod vehicle_aggregation;

pub use vehicle_aggregation::{
    AggregatedVehicle, AggregationConfig, PriceStatus, VehicleAggregationService,
};
