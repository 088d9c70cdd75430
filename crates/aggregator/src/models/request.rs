use serde::{Deserialize, Serialize};

use super::types::Category;

/// Economy category request: a crypto asset code such as "btc".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyRequest {
    pub asset: String,
}

/// Weather category request for a country name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub country: String,
}

/// Air quality category request for a country name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirQualityRequest {
    pub country: String,
}

/// A single requested category with its caller-facing identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryRequest {
    Economy { asset: String },
    Weather { country: String },
    AirQuality { country: String },
}

impl CategoryRequest {
    pub fn category(&self) -> Category {
        match self {
            CategoryRequest::Economy { .. } => Category::Economy,
            CategoryRequest::Weather { .. } => Category::Weather,
            CategoryRequest::AirQuality { .. } => Category::AirQuality,
        }
    }

    /// The free-form identifier the caller supplied (asset code or country name).
    pub fn identifier(&self) -> &str {
        match self {
            CategoryRequest::Economy { asset } => asset,
            CategoryRequest::Weather { country } | CategoryRequest::AirQuality { country } => {
                country
            }
        }
    }
}

/// Inbound request: which categories the caller wants, each optional.
///
/// ```json
/// {
///   "economy": {"asset": "btc"},
///   "weather": {"country": "algeria"},
///   "air": {"country": "algeria"}
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy: Option<EconomyRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air: Option<AirQualityRequest>,
}

impl AggregateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_economy(mut self, asset: impl Into<String>) -> Self {
        self.economy = Some(EconomyRequest {
            asset: asset.into(),
        });
        self
    }

    pub fn with_weather(mut self, country: impl Into<String>) -> Self {
        self.weather = Some(WeatherRequest {
            country: country.into(),
        });
        self
    }

    pub fn with_air_quality(mut self, country: impl Into<String>) -> Self {
        self.air = Some(AirQualityRequest {
            country: country.into(),
        });
        self
    }

    /// Present categories as tagged requests, in wire order.
    pub fn category_requests(&self) -> Vec<CategoryRequest> {
        let mut requests = Vec::with_capacity(3);
        if let Some(economy) = &self.economy {
            requests.push(CategoryRequest::Economy {
                asset: economy.asset.clone(),
            });
        }
        if let Some(weather) = &self.weather {
            requests.push(CategoryRequest::Weather {
                country: weather.country.clone(),
            });
        }
        if let Some(air) = &self.air {
            requests.push(CategoryRequest::AirQuality {
                country: air.country.clone(),
            });
        }
        requests
    }

    pub fn requested_categories(&self) -> Vec<Category> {
        self.category_requests()
            .iter()
            .map(CategoryRequest::category)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.economy.is_none() && self.weather.is_none() && self.air.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_request() {
        let request: AggregateRequest =
            serde_json::from_str(r#"{"weather": {"country": "algeria"}}"#).unwrap();
        assert!(request.economy.is_none());
        assert!(request.air.is_none());
        assert_eq!(request.requested_categories(), vec![Category::Weather]);
    }

    #[test]
    fn test_missing_inner_field_is_rejected() {
        let result = serde_json::from_str::<AggregateRequest>(r#"{"economy": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_requests_preserve_identifiers() {
        let request = AggregateRequest::new()
            .with_economy("BTC")
            .with_weather("Algeria")
            .with_air_quality("france");

        let requests = request.category_requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].identifier(), "BTC");
        assert_eq!(requests[1].category(), Category::Weather);
        assert_eq!(requests[2].identifier(), "france");
    }

    #[test]
    fn test_empty_request() {
        let request: AggregateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.is_empty());
        assert!(request.category_requests().is_empty());
    }
}
