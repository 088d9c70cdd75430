//! Category provider trait definitions.
//!
//! This module defines the core `CategoryProvider` trait that all
//! gateway data providers implement.

use async_trait::async_trait;

use crate::errors::GatewayError;
use crate::models::{Category, CategoryResult, NormalizedParams};

/// Trait for category data providers.
///
/// A provider performs one outbound call per fetch and normalizes the reply
/// into a flat [`CategoryResult`]. Providers hold no per-request state and are
/// shared across requests behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use state_gateway_aggregator::provider::CategoryProvider;
///
/// struct FixedWeather;
///
/// #[async_trait]
/// impl CategoryProvider for FixedWeather {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn category(&self) -> Category {
///         Category::Weather
///     }
///
///     async fn fetch(&self, _params: &NormalizedParams) -> Result<CategoryResult, GatewayError> {
///         Ok(CategoryResult::new().with_field("temperature", Some(20.into())))
///     }
/// }
/// ```
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO" or "OPEN_METEO".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// The category this provider serves.
    fn category(&self) -> Category;

    /// Fetch and normalize data for already-resolved parameters.
    ///
    /// # Returns
    ///
    /// The normalized result on success, or a `GatewayError` describing
    /// why the provider could not deliver data.
    async fn fetch(&self, params: &NormalizedParams) -> Result<CategoryResult, GatewayError>;
}
