use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::models::Category;
use crate::provider::coingecko::CoinGeckoProvider;
use crate::provider::open_meteo::{OpenMeteoAirQualityProvider, OpenMeteoWeatherProvider};
use crate::provider::CategoryProvider;
use crate::settings::GatewaySettings;

/// One provider per category, shared across requests.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<Category, Arc<dyn CategoryProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the production registry: CoinGecko for economy, Open-Meteo for
    /// weather and air quality, all sharing one pooled HTTP client.
    pub fn from_settings(settings: &GatewaySettings) -> Self {
        let client = settings.build_client();
        Self::new()
            .with_provider(Arc::new(CoinGeckoProvider::new(
                client.clone(),
                settings.economy_url.clone(),
            )))
            .with_provider(Arc::new(OpenMeteoWeatherProvider::new(
                client.clone(),
                settings.weather_url.clone(),
            )))
            .with_provider(Arc::new(OpenMeteoAirQualityProvider::new(
                client,
                settings.air_quality_url.clone(),
            )))
    }

    /// Register a provider under its category, replacing any previous one.
    pub fn register(&mut self, provider: Arc<dyn CategoryProvider>) {
        let category = provider.category();
        if let Some(previous) = self.providers.insert(category, provider) {
            warn!(
                "Replaced provider '{}' for category '{}'",
                previous.id(),
                category
            );
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn CategoryProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn get(&self, category: Category) -> Option<&Arc<dyn CategoryProvider>> {
        self.providers.get(&category)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_covers_every_category() {
        let registry = ProviderRegistry::from_settings(&GatewaySettings::default());

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(Category::Economy).unwrap().id(), "COINGECKO");
        assert_eq!(registry.get(Category::Weather).unwrap().id(), "OPEN_METEO");
        assert_eq!(
            registry.get(Category::AirQuality).unwrap().id(),
            "OPEN_METEO_AIR_QUALITY"
        );
    }

    #[test]
    fn test_register_replaces_by_category() {
        let settings = GatewaySettings::default();
        let client = settings.build_client();
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());

        registry.register(Arc::new(OpenMeteoWeatherProvider::new(
            client.clone(),
            "http://first",
        )));
        registry.register(Arc::new(OpenMeteoWeatherProvider::new(
            client,
            "http://second",
        )));

        assert_eq!(registry.len(), 1);
        assert!(registry.get(Category::Economy).is_none());
    }
}
