//! # REST Handlers
//!
//! Request handlers and wire DTOs for the vehicle catalog API.
//!
//! Handlers are thin: they deserialize payloads, call the aggregation
//! service, and translate [`ApplicationError`] into status codes via
//! [`ApiError`]. All composition logic lives in the application layer.

use crate::api::rest::links;
use crate::application::error::ApplicationError;
use crate::application::services::vehicle_aggregation::{
    AggregatedVehicle, PriceStatus, VehicleAggregationService,
};
use crate::domain::entities::vehicle::{Vehicle, VehicleAttributes, VehicleDraft};
use crate::domain::services::validation::Violation;
use crate::domain::value_objects::{PriceQuote, VehicleId};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The aggregation service the handlers delegate to.
    pub service: Arc<VehicleAggregationService>,
}

impl AppState {
    /// Creates handler state over an aggregation service.
    #[must_use]
    pub fn new(service: Arc<VehicleAggregationService>) -> Self {
        Self { service }
    }
}

/// Incoming vehicle payload for create and replace requests.
///
/// Any `id` in the payload is ignored on replace: the path identifier is
/// authoritative.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRequest {
    /// Descriptive attributes of the vehicle.
    #[serde(default)]
    pub attributes: VehicleAttributes,
}

impl VehicleRequest {
    fn into_draft(self) -> VehicleDraft {
        VehicleDraft::from_attributes(self.attributes)
    }
}

/// A persisted vehicle, as returned by write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    /// Store-assigned identifier.
    pub id: VehicleId,
    /// Authoritative stored attributes.
    pub attributes: VehicleAttributes,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        let id = vehicle.id();
        Self {
            id,
            attributes: vehicle.into_attributes(),
        }
    }
}

/// A quoted price on a read response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBody {
    /// Quoted amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl From<&PriceQuote> for PriceBody {
    fn from(quote: &PriceQuote) -> Self {
        Self {
            amount: quote.amount().get(),
            currency: quote.currency().to_string(),
        }
    }
}

/// An aggregated vehicle view, as returned by read operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedVehicleResponse {
    /// Store-assigned identifier.
    pub id: VehicleId,
    /// Stored attributes.
    pub attributes: VehicleAttributes,
    /// Outcome of the price enrichment step.
    pub price_status: PriceStatus,
    /// The quote, present exactly when `price_status` is `PRICED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceBody>,
}

impl From<AggregatedVehicle> for AggregatedVehicleResponse {
    fn from(result: AggregatedVehicle) -> Self {
        let (vehicle, status, quote) = result.into_parts();
        Self {
            id: vehicle.id(),
            price: quote.as_ref().map(PriceBody::from),
            price_status: status,
            attributes: vehicle.into_attributes(),
        }
    }
}

/// Structured error body for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Per-attribute violations for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Violation>>,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: String,
}

/// Application error carried to the response layer.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self.0 {
            ApplicationError::VehicleNotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            ApplicationError::Validation { violations } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_failed",
                Some(violations.clone()),
            ),
            ApplicationError::Domain(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "domain_error", None)
            }
            ApplicationError::Repository(_) | ApplicationError::Internal(_) => {
                tracing::error!(error = %self.0, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message: self.0.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// `GET /vehicles` — lists all vehicles with their price status.
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<AggregatedVehicleResponse>>, ApiError> {
    let results = state.service.list().await?;
    Ok(Json(
        results
            .into_iter()
            .map(AggregatedVehicleResponse::from)
            .collect(),
    ))
}

/// `GET /vehicles/{id}` — fetches one vehicle with its price status.
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<AggregatedVehicleResponse>, ApiError> {
    let result = state.service.get(VehicleId::new(id)).await?;
    Ok(Json(result.into()))
}

/// `POST /vehicles` — creates a vehicle, returning it with a `Location`
/// header pointing at the new resource.
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleRequest>,
) -> Result<Response, ApiError> {
    let saved = state.service.save(request.into_draft()).await?;
    let location = links::vehicle_uri(saved.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VehicleResponse::from(saved)),
    )
        .into_response())
}

/// `PUT /vehicles/{id}` — replaces a vehicle's attributes in full.
pub async fn replace_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<VehicleRequest>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let saved = state
        .service
        .update(VehicleId::new(id), request.into_draft())
        .await?;
    Ok(Json(saved.into()))
}

/// `DELETE /vehicles/{id}` — removes a vehicle.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(VehicleId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
