//! Open-Meteo providers for the weather and air quality categories.
//!
//! Both endpoints are keyed by latitude/longitude and return a "current"
//! object, but under different names and with different query flags:
//! - Forecast API: `current_weather=true` → `current_weather.{temperature,windspeed}`
//! - Air Quality API: `current=pm10` → `current.pm10`

mod air_quality;
mod weather;

pub use air_quality::OpenMeteoAirQualityProvider;
pub use weather::OpenMeteoWeatherProvider;

use crate::errors::GatewayError;
use crate::models::{Coordinates, NormalizedParams};

/// Extract coordinates or report a wiring defect for `provider`.
fn expect_location(
    params: &NormalizedParams,
    provider: &'static str,
) -> Result<Coordinates, GatewayError> {
    params
        .coordinates()
        .ok_or_else(|| GatewayError::ParamsMismatch {
            provider: provider.to_string(),
            params: format!("{:?}", params),
        })
}

/// Query pairs for a location, followed by the endpoint-specific flag.
fn location_query(coordinates: Coordinates, flag: (&str, &str)) -> [(String, String); 3] {
    [
        ("latitude".to_string(), coordinates.latitude.to_string()),
        ("longitude".to_string(), coordinates.longitude.to_string()),
        (flag.0.to_string(), flag.1.to_string()),
    ]
}
