//! StormGlass forecast client
//!
//! Requests point forecasts and flattens them to the configured model.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::StormGlassConfig;
use crate::error::StormGlassError;
use crate::models::{ForecastPoint, ForecastResponse, Quantity, StormGlassPoint};
use crate::normalize::PointNormalizer;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Trait for marine forecast clients
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the hourly forecast for a location
    ///
    /// Hours missing any tracked quantity are left out; the rest keep the
    /// upstream order. An empty list is a valid result.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not a
    /// forecast body.
    async fn fetch_points(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastPoint>, StormGlassError>;
}

/// StormGlass point-forecast client
#[derive(Debug)]
pub struct StormGlassClient<T = ReqwestTransport> {
    transport: T,
    config: StormGlassConfig,
    normalizer: PointNormalizer,
}

impl StormGlassClient<ReqwestTransport> {
    /// Create a client talking to the network through `reqwest`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: StormGlassConfig) -> Result<Self, StormGlassError> {
        config.validate().map_err(StormGlassError::Configuration)?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::from_parts(transport, config))
    }

    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, StormGlassError> {
        Self::new(StormGlassConfig::default())
    }
}

impl<T: HttpTransport> StormGlassClient<T> {
    /// Create a client using a caller-supplied transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(transport: T, config: StormGlassConfig) -> Result<Self, StormGlassError> {
        config.validate().map_err(StormGlassError::Configuration)?;
        Ok(Self::from_parts(transport, config))
    }

    fn from_parts(transport: T, config: StormGlassConfig) -> Self {
        let normalizer = PointNormalizer::new(config.source.clone());
        Self {
            transport,
            config,
            normalizer,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &StormGlassConfig {
        &self.config
    }

    /// Whether `point` has a time stamp and a truthy value for every quantity
    #[must_use]
    pub fn is_valid_point(&self, point: &StormGlassPoint) -> bool {
        self.normalizer.is_valid_point(point)
    }

    /// Drop incomplete hours and flatten the rest
    #[must_use]
    pub fn normalize_response(&self, response: ForecastResponse) -> Vec<ForecastPoint> {
        self.normalizer.normalize(response.hours)
    }

    fn build_request(&self, latitude: f64, longitude: f64) -> HttpRequest {
        HttpRequest::get(self.config.point_url())
            .with_query("lat", latitude)
            .with_query("lng", longitude)
            .with_query("params", Quantity::request_params())
            .with_query("source", &self.config.source)
    }

    fn parse_response(body: Value) -> Result<ForecastResponse, StormGlassError> {
        serde_json::from_value(body).map_err(|e| StormGlassError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl<T: HttpTransport> ForecastClient for StormGlassClient<T> {
    #[instrument(skip(self), fields(lat = %latitude, lng = %longitude, source = %self.config.source))]
    async fn fetch_points(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastPoint>, StormGlassError> {
        let request = self.build_request(latitude, longitude);
        debug!(url = %request.url, "Fetching forecast points");

        let body = self.transport.get_json(&request).await?;
        let response = Self::parse_response(body)?;

        Ok(self.normalize_response(response))
    }
}
