use serde::{Deserialize, Serialize};
use state_gateway_aggregator::{
    AggregateRequest, AggregateResponse, AirQualityRequest, CategoryResult, EconomyRequest,
    WeatherRequest,
};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EconomyParams {
    /// Cryptocurrency asset code (btc, eth, sol)
    pub asset: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryParams {
    /// Country name (algeria, france, ...)
    pub country: String,
}

/// Body of `POST /state`: which categories the caller wants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StateRequest {
    #[serde(default)]
    pub economy: Option<EconomyParams>,
    #[serde(default)]
    pub weather: Option<CountryParams>,
    #[serde(default)]
    pub air: Option<CountryParams>,
}

impl From<StateRequest> for AggregateRequest {
    fn from(r: StateRequest) -> Self {
        AggregateRequest {
            economy: r.economy.map(|e| EconomyRequest { asset: e.asset }),
            weather: r.weather.map(|w| WeatherRequest { country: w.country }),
            air: r.air.map(|a| AirQualityRequest { country: a.country }),
        }
    }
}

/// Raw aggregated values; categories that were not requested or could not be
/// fetched are left out.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct StateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>, example = json!({"btc_usd": 68421}))]
    pub economy: Option<CategoryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>, example = json!({"temperature": 22, "wind_speed": 15.2}))]
    pub weather: Option<CategoryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>, example = json!({"pm10": 45}))]
    pub air: Option<CategoryResult>,
}

impl From<AggregateResponse> for StateResponse {
    fn from(r: AggregateResponse) -> Self {
        Self {
            economy: r.economy,
            weather: r.weather,
            air: r.air,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
