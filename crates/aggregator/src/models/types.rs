use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Provider identifier - mostly static constants
pub type ProviderId = Cow<'static, str>;

/// Provider-specific coin identifier (e.g. "bitcoin")
pub type CoinId = Arc<str>;

/// One of the data domains a caller can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "economy")]
    Economy,
    #[serde(rename = "weather")]
    Weather,
    #[serde(rename = "air")]
    AirQuality,
}

impl Category {
    /// All categories, in wire order.
    pub const ALL: [Category; 3] = [Category::Economy, Category::Weather, Category::AirQuality];

    /// Wire name of the category (the key used in requests and responses).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Economy => "economy",
            Category::Weather => "weather",
            Category::AirQuality => "air",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::Economy.as_str(), "economy");
        assert_eq!(Category::Weather.as_str(), "weather");
        assert_eq!(Category::AirQuality.as_str(), "air");
    }

    #[test]
    fn test_category_serde_matches_wire_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        let parsed: Category = serde_json::from_str("\"air\"").unwrap();
        assert_eq!(parsed, Category::AirQuality);
    }
}
