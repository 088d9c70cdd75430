use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Number;

use crate::errors::GatewayError;
use crate::models::{Category, CategoryResult, NormalizedParams};
use crate::provider::http::get_json;
use crate::provider::CategoryProvider;

use super::{expect_location, location_query};

const PROVIDER_ID: &str = "OPEN_METEO";

/// Forecast API response; only the current conditions are read.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(default)]
    temperature: Option<Number>,
    #[serde(default)]
    windspeed: Option<Number>,
}

/// Current weather from the Open-Meteo forecast API.
///
/// Produces `{temperature, wind_speed}`; either may be null when the
/// provider omits it, as long as `current_weather` itself is present.
pub struct OpenMeteoWeatherProvider {
    client: Client,
    base_url: String,
}

impl OpenMeteoWeatherProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn normalize(response: ForecastResponse) -> Result<CategoryResult, GatewayError> {
        let current = response
            .current_weather
            .ok_or_else(|| GatewayError::MissingField {
                provider: PROVIDER_ID.to_string(),
                field: "current_weather".to_string(),
            })?;

        Ok(CategoryResult::new()
            .with_field("temperature", current.temperature)
            .with_field("wind_speed", current.windspeed))
    }
}

#[async_trait]
impl CategoryProvider for OpenMeteoWeatherProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn category(&self) -> Category {
        Category::Weather
    }

    async fn fetch(&self, params: &NormalizedParams) -> Result<CategoryResult, GatewayError> {
        let coordinates = expect_location(params, PROVIDER_ID)?;
        let query = location_query(coordinates, ("current_weather", "true"));

        let response: ForecastResponse =
            get_json(&self.client, &self.base_url, &query, PROVIDER_ID).await?;

        Self::normalize(response)
    }
}
