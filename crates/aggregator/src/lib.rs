//! State Gateway Aggregator Crate
//!
//! This crate provides the parallel aggregation engine behind the state
//! gateway: one inbound request fans out to up to three third-party data
//! providers and comes back as a single best-effort response.
//!
//! # Overview
//!
//! The aggregator supports:
//! - Three categories: economy (coin price), weather, air quality
//! - Case-insensitive identifier resolution from embedded lookup tables
//! - Concurrent provider calls bounded by one uniform timeout
//! - Per-category omission instead of whole-request failure
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | AggregateRequest |  (economy? weather? air?)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  TableResolver   |  asset → coin id, country → coordinates
//! +------------------+
//!          |
//!          v
//! +------------------+     +--------------------------------------+
//! |    Aggregator    | --> | CoinGecko | Open-Meteo | OM Air Quality |  (concurrent)
//! +------------------+     +--------------------------------------+
//!          |
//!          v
//! +-------------------+
//! | AggregateResponse |  only categories that succeeded
//! +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`AggregateRequest`] - Sparse set of category requests
//! - [`NormalizedParams`] - Provider-specific parameters
//! - [`CategoryResult`] - Flat field → number-or-null mapping
//! - [`AggregateResponse`] - Combined result
//! - [`Aggregator`] - The fan-out engine
//! - [`AggregateReport`] - Why each omitted category is missing

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod settings;

// Re-export all public types from models
pub use models::{
    AggregateRequest, AggregateResponse, AirQualityRequest, Category, CategoryRequest,
    CategoryResult, CoinId, Coordinates, EconomyRequest, FieldValue, NormalizedParams, ProviderId,
    ResolvedCategory, WeatherRequest,
};

pub use errors::{GatewayError, OmissionReason};

// Re-export resolver types
pub use resolver::{
    CategoryResolver, DroppedCategory, LookupTables, NormalizedRequest, TableResolver,
};

// Re-export provider types
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::open_meteo::{OpenMeteoAirQualityProvider, OpenMeteoWeatherProvider};
pub use provider::CategoryProvider;

// Re-export registry types
pub use registry::{AggregateReport, Aggregator, CategoryAttempt, CategoryOutcome, ProviderRegistry};

pub use settings::GatewaySettings;
