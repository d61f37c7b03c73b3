//! # Route Table
//!
//! The explicit method+path dispatch table for the REST surface.

use crate::api::rest::handlers::{self, AppState};
use crate::api::rest::links;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Builds the router mapping method and path to handler.
///
/// Routes:
///
/// | Method   | Path             | Handler                    |
/// |----------|------------------|----------------------------|
/// | `GET`    | `/vehicles`      | [`handlers::list_vehicles`]  |
/// | `POST`   | `/vehicles`      | [`handlers::create_vehicle`] |
/// | `GET`    | `/vehicles/{id}` | [`handlers::get_vehicle`]    |
/// | `PUT`    | `/vehicles/{id}` | [`handlers::replace_vehicle`]|
/// | `DELETE` | `/vehicles/{id}` | [`handlers::delete_vehicle`] |
/// | `GET`    | `/health`        | [`handlers::health`]         |
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            links::VEHICLES_PATH,
            get(handlers::list_vehicles).post(handlers::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(handlers::get_vehicle)
                .put(handlers::replace_vehicle)
                .delete(handlers::delete_vehicle),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
