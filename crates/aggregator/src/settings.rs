//! Outbound provider settings.

use std::time::Duration;

use reqwest::Client;

/// CoinGecko simple price endpoint.
pub const DEFAULT_ECONOMY_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Open-Meteo forecast endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo air quality endpoint.
pub const DEFAULT_AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Uniform timeout applied to every outbound provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider base URLs and the shared outbound timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewaySettings {
    pub economy_url: String,
    pub weather_url: String,
    pub air_quality_url: String,
    pub timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            economy_url: DEFAULT_ECONOMY_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            air_quality_url: DEFAULT_AIR_QUALITY_URL.to_string(),
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

impl GatewaySettings {
    /// Build the pooled HTTP client shared by all providers.
    pub fn build_client(&self) -> Client {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
