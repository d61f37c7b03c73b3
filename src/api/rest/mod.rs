//! # REST API
//!
//! REST endpoints using axum for the vehicle catalog.
//!
//! # Endpoints
//!
//! - `GET /vehicles` - List all vehicles with price status
//! - `GET /vehicles/{id}` - Get vehicle by id
//! - `POST /vehicles` - Create a vehicle (201 + `Location` header)
//! - `PUT /vehicles/{id}` - Replace a vehicle's attributes
//! - `DELETE /vehicles/{id}` - Delete a vehicle
//! - `GET /health` - Health check
//!
//! # Usage
//!
//! ```ignore
//! use vehicle_catalog::api::rest::{create_router, AppState};
//!
//! let router = create_router(AppState::new(service));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod links;
pub mod routes;

pub use handlers::{
    AggregatedVehicleResponse, ApiError, AppState, ErrorResponse, HealthResponse, PriceBody,
    VehicleRequest, VehicleResponse,
};
pub use routes::create_router;
