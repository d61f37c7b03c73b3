//! Vehicle catalog server entry point.
//!
//! Explicit composition root: builds the store, the pricing client, and
//! the aggregation service once at startup, then serves the REST API.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vehicle_catalog::api::rest::{AppState, create_router};
use vehicle_catalog::application::services::vehicle_aggregation::{
    AggregationConfig, VehicleAggregationService,
};
use vehicle_catalog::config::Settings;
use vehicle_catalog::infrastructure::persistence::InMemoryVehicleRepository;
use vehicle_catalog::infrastructure::pricing::HttpPricingClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vehicle_catalog=info,tower_http=info")),
        )
        .init();

    let settings = Settings::load().context("failed to load settings")?;

    let repository = Arc::new(InMemoryVehicleRepository::new());
    let pricing = Arc::new(
        HttpPricingClient::new(&settings.pricing.base_url, settings.pricing.timeout_ms)
            .context("failed to build pricing client")?,
    );
    let service = Arc::new(VehicleAggregationService::new(
        repository,
        pricing,
        AggregationConfig::with_quote_timeout(settings.pricing.timeout_ms),
    ));

    let router = create_router(AppState::new(service));
    let addr = settings.server.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        addr = %addr,
        pricing_url = %settings.pricing.base_url,
        "vehicle catalog listening"
    );

    axum::serve(listener, router)
        .await
        .context("server exited")?;

    Ok(())
}
