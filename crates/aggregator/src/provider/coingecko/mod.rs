//! CoinGecko provider for the economy category.
//!
//! Uses the `simple/price` endpoint to fetch the current USD price of a
//! single coin. The response is keyed by coin id:
//!
//! ```json
//! { "bitcoin": { "usd": 68421 } }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Number;

use crate::errors::GatewayError;
use crate::models::{Category, CategoryResult, NormalizedParams};
use crate::provider::http::get_json;
use crate::provider::CategoryProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Quote currency requested from the provider and used in the field name.
const VS_CURRENCY: &str = "usd";

/// API response from `simple/price`, keyed by coin id.
type SimplePriceResponse = HashMap<String, CoinQuote>;

#[derive(Debug, Deserialize)]
struct CoinQuote {
    #[serde(default)]
    usd: Option<Number>,
}

/// CoinGecko price provider.
///
/// # Example
///
/// ```ignore
/// use state_gateway_aggregator::provider::coingecko::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new(reqwest::Client::new(), "https://api.coingecko.com/api/v3/simple/price");
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Extract the USD price for `coin_id` and name it `{asset}_usd`.
    fn normalize(
        response: SimplePriceResponse,
        coin_id: &str,
        asset: &str,
    ) -> Result<CategoryResult, GatewayError> {
        let price = response
            .get(coin_id)
            .and_then(|quote| quote.usd.clone())
            .ok_or_else(|| GatewayError::MissingField {
                provider: PROVIDER_ID.to_string(),
                field: format!("{}.{}", coin_id, VS_CURRENCY),
            })?;

        Ok(CategoryResult::new().with_field(format!("{}_{}", asset, VS_CURRENCY), Some(price)))
    }
}

#[async_trait]
impl CategoryProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn category(&self) -> Category {
        Category::Economy
    }

    async fn fetch(&self, params: &NormalizedParams) -> Result<CategoryResult, GatewayError> {
        let (asset, coin_id) = match params {
            NormalizedParams::Coin { asset, coin_id } => (asset, coin_id),
            other => {
                return Err(GatewayError::ParamsMismatch {
                    provider: PROVIDER_ID.to_string(),
                    params: format!("{:?}", other),
                })
            }
        };

        let response: SimplePriceResponse = get_json(
            &self.client,
            &self.base_url,
            &[("ids", &**coin_id), ("vs_currencies", VS_CURRENCY)],
            PROVIDER_ID,
        )
        .await?;

        Self::normalize(response, coin_id, asset)
    }
}
