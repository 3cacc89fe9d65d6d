//! StormGlass marine forecast integration
//!
//! Client for the StormGlass point-forecast API (<https://stormglass.io>).
//!
//! # Architecture
//!
//! [`ForecastClient`] defines the fetch capability, implemented by
//! [`StormGlassClient`]. The client talks to the network through an injected
//! [`HttpTransport`]; [`ReqwestTransport`] is the production implementation.
//! Raw upstream points carry one value per forecast model for every quantity;
//! [`PointNormalizer`] keeps the points that have a usable value from the
//! configured model and flattens them into [`ForecastPoint`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_stormglass::{ForecastClient, StormGlassClient, StormGlassConfig};
//!
//! let client = StormGlassClient::new(StormGlassConfig::default())?;
//! let points = client.fetch_points(-33.79, 151.28).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod normalize;
mod transport;

pub use client::{ForecastClient, StormGlassClient};
pub use config::StormGlassConfig;
pub use error::{StormGlassError, TransportError};
pub use models::{ForecastPoint, ForecastResponse, PointSource, Quantity, StormGlassPoint};
pub use normalize::PointNormalizer;
pub use transport::{HttpRequest, HttpTransport, ReqwestTransport};
