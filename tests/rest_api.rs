//! End-to-end tests for the REST surface over an in-memory store and a
//! scripted pricing client.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use vehicle_catalog::api::rest::{AppState, create_router};
use vehicle_catalog::application::services::vehicle_aggregation::{
    AggregationConfig, VehicleAggregationService,
};
use vehicle_catalog::domain::value_objects::{Price, PriceQuote, VehicleId};
use vehicle_catalog::infrastructure::persistence::InMemoryVehicleRepository;
use vehicle_catalog::infrastructure::pricing::error::{PricingError, PricingResult};
use vehicle_catalog::infrastructure::pricing::{PricingClient, QuoteLookup};

/// Scripted pricing client: one behavior per vehicle id, NotPriced by
/// default.
#[derive(Debug, Default)]
struct StubPricingClient {
    replies: Mutex<HashMap<u64, PricingResult<QuoteLookup>>>,
}

impl StubPricingClient {
    fn new() -> Self {
        Self::default()
    }

    fn priced(self, id: u64, amount: i64) -> Self {
        let quote = PriceQuote::new(
            VehicleId::new(id),
            "USD",
            Price::new(Decimal::new(amount, 0)).unwrap(),
        );
        self.replies
            .lock()
            .unwrap()
            .insert(id, Ok(QuoteLookup::Found(quote)));
        self
    }

    fn unreachable(self, id: u64) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(id, Err(PricingError::connection("connection refused")));
        self
    }
}

#[async_trait]
impl PricingClient for StubPricingClient {
    async fn quote(&self, vehicle_id: VehicleId) -> PricingResult<QuoteLookup> {
        self.replies
            .lock()
            .unwrap()
            .get(&vehicle_id.get())
            .cloned()
            .unwrap_or(Ok(QuoteLookup::NotPriced))
    }
}

fn app(pricing: StubPricingClient) -> Router {
    let service = Arc::new(VehicleAggregationService::new(
        Arc::new(InMemoryVehicleRepository::new()),
        Arc::new(pricing),
        AggregationConfig::default(),
    ));
    create_router(AppState::new(service))
}

fn post_vehicle(attributes: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/vehicles")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "attributes": attributes }).to_string(),
        ))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn toyota() -> Value {
    json!({ "make": "Toyota", "model": "Corolla", "year": 2020 })
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app(StubPricingClient::new());
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_returns_201_with_location() {
    let app = app(StubPricingClient::new());
    let response = app.oneshot(post_vehicle(toyota())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(location.starts_with("/vehicles/"));

    let body = body_json(response).await;
    assert_eq!(body["attributes"]["make"], "Toyota");
    assert!(body["id"].is_u64());
}

#[tokio::test]
async fn create_then_get_round_trips_attributes() {
    let app = app(StubPricingClient::new());

    let created = app
        .clone()
        .oneshot(post_vehicle(toyota()))
        .await
        .unwrap();
    let location = created
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let response = app.oneshot(get(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["attributes"]["make"], "Toyota");
    assert_eq!(body["attributes"]["model"], "Corolla");
    assert_eq!(body["attributes"]["year"], 2020);
}

#[tokio::test]
async fn get_includes_price_when_service_quotes() {
    let app = app(StubPricingClient::new().priced(1, 18_500));
    app.clone().oneshot(post_vehicle(toyota())).await.unwrap();

    let body = body_json(app.oneshot(get("/vehicles/1")).await.unwrap()).await;
    assert_eq!(body["price_status"], "PRICED");
    assert_eq!(body["price"]["currency"], "USD");
}

#[tokio::test]
async fn get_reports_unavailable_without_failing() {
    let app = app(StubPricingClient::new());
    app.clone().oneshot(post_vehicle(toyota())).await.unwrap();

    let response = app.oneshot(get("/vehicles/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["price_status"], "PRICE_UNAVAILABLE");
    assert!(body.get("price").is_none());
}

#[tokio::test]
async fn get_reports_unreachable_without_failing() {
    let app = app(StubPricingClient::new().unreachable(1));
    app.clone().oneshot(post_vehicle(toyota())).await.unwrap();

    let response = app.oneshot(get("/vehicles/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["price_status"], "PRICE_SERVICE_UNREACHABLE");
    assert_eq!(body["attributes"]["make"], "Toyota");
}

#[tokio::test]
async fn get_unknown_vehicle_is_404() {
    let app = app(StubPricingClient::new());
    let response = app.oneshot(get("/vehicles/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn list_aggregates_each_vehicle_independently() {
    let app = app(StubPricingClient::new().priced(1, 10_000).unreachable(2));
    app.clone().oneshot(post_vehicle(toyota())).await.unwrap();
    app.clone()
        .oneshot(post_vehicle(
            json!({ "make": "Honda", "model": "Civic", "year": 2019 }),
        ))
        .await
        .unwrap();

    let body = body_json(app.oneshot(get("/vehicles")).await.unwrap()).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["price_status"], "PRICED");
    assert_eq!(items[1]["price_status"], "PRICE_SERVICE_UNREACHABLE");
    assert_eq!(items[1]["attributes"]["make"], "Honda");
}

#[tokio::test]
async fn create_with_invalid_payload_is_422_with_details() {
    let app = app(StubPricingClient::new());
    let response = app
        .oneshot(post_vehicle(json!({ "make": "Toyota" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_failed");
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
}

#[tokio::test]
async fn put_replaces_attributes_in_full() {
    let app = app(StubPricingClient::new());
    app.clone().oneshot(post_vehicle(toyota())).await.unwrap();

    let request = Request::builder()
        .method("PUT")
        .uri("/vehicles/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "attributes": { "make": "Honda", "model": "Civic", "year": 2021 } })
                .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(app.oneshot(get("/vehicles/1")).await.unwrap()).await;
    assert_eq!(body["attributes"]["make"], "Honda");
    // Full replace: nothing of the old payload survives beyond the
    // replacement set.
    assert_eq!(body["attributes"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn put_to_unknown_id_upserts() {
    let app = app(StubPricingClient::new());

    let request = Request::builder()
        .method("PUT")
        .uri("/vehicles/42")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "attributes": toyota() }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/vehicles/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = app(StubPricingClient::new());
    app.clone().oneshot(post_vehicle(toyota())).await.unwrap();

    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete("/vehicles/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(delete("/vehicles/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/vehicles/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_never_created_id_is_404() {
    let app = app(StubPricingClient::new());
    let request = Request::builder()
        .method("DELETE")
        .uri("/vehicles/100")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
