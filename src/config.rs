//! # Configuration
//!
//! Layered settings: built-in defaults overridden by environment
//! variables with the `VEHICLE_CATALOG` prefix (double underscore as the
//! section separator, e.g. `VEHICLE_CATALOG_PRICING__BASE_URL`).

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pricing service client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    /// Base URL of the pricing microservice.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Pricing client settings.
    pub pricing: PricingSettings,
}

impl Settings {
    /// Loads settings from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an override has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("pricing.base_url", "http://localhost:8082")?
            .set_default("pricing.timeout_ms", 2000)?
            .add_source(Environment::with_prefix("VEHICLE_CATALOG").separator("__"))
            .build()?
            .try_deserialize()
    }
}
