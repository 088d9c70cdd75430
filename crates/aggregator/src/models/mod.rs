//! Gateway data models
//!
//! This module contains the core data types for aggregation:
//! - `types` - Category enum and identifier aliases (ProviderId, CoinId)
//! - `request` - Inbound request shape (AggregateRequest, CategoryRequest)
//! - `provider_params` - Provider-specific parameters (NormalizedParams, Coordinates)
//! - `response` - Normalized results (CategoryResult, AggregateResponse)

mod provider_params;
mod request;
mod response;
mod types;

pub use provider_params::{Coordinates, NormalizedParams, ResolvedCategory};
pub use request::{
    AggregateRequest, AirQualityRequest, CategoryRequest, EconomyRequest, WeatherRequest,
};
pub use response::{AggregateResponse, CategoryResult, FieldValue};
pub use types::{Category, CoinId, ProviderId};
