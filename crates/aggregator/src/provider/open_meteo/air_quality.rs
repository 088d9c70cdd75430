use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::GatewayError;
use crate::models::{Category, CategoryResult, NormalizedParams};
use crate::provider::http::get_json;
use crate::provider::CategoryProvider;

use super::{expect_location, location_query};

const PROVIDER_ID: &str = "OPEN_METEO_AIR_QUALITY";

/// Pollutant requested from the `current` block.
const PM10: &str = "pm10";

/// Air Quality API response; `current` is kept as a raw map so that a
/// present-but-null reading can be told apart from a missing one.
#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    #[serde(default)]
    current: Option<Map<String, Value>>,
}

/// Current PM10 concentration from the Open-Meteo air quality API.
pub struct OpenMeteoAirQualityProvider {
    client: Client,
    base_url: String,
}

impl OpenMeteoAirQualityProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn normalize(response: AirQualityResponse) -> Result<CategoryResult, GatewayError> {
        let missing = || GatewayError::MissingField {
            provider: PROVIDER_ID.to_string(),
            field: format!("current.{}", PM10),
        };

        let current = response.current.ok_or_else(missing)?;
        let pm10 = match current.get(PM10).ok_or_else(missing)? {
            Value::Number(n) => Some(n.clone()),
            Value::Null => None,
            other => {
                return Err(GatewayError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("pm10 is not a number: {}", other),
                })
            }
        };

        Ok(CategoryResult::new().with_field(PM10, pm10))
    }
}

#[async_trait]
impl CategoryProvider for OpenMeteoAirQualityProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn category(&self) -> Category {
        Category::AirQuality
    }

    async fn fetch(&self, params: &NormalizedParams) -> Result<CategoryResult, GatewayError> {
        let coordinates = expect_location(params, PROVIDER_ID)?;
        let query = location_query(coordinates, ("current", PM10));

        let response: AirQualityResponse =
            get_json(&self.client, &self.base_url, &query, PROVIDER_ID).await?;

        Self::normalize(response)
    }
}
