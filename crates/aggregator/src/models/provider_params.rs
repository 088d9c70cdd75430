use serde::{Deserialize, Serialize};

use super::types::{Category, CoinId};

/// Geographic point used by both Open-Meteo providers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Provider-specific fetch parameters.
/// Produced by the resolver, consumed by providers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NormalizedParams {
    /// Coin price lookup. `asset` is the caller's code, lowercased, and
    /// names the result field (`{asset}_usd`).
    Coin { asset: String, coin_id: CoinId },

    /// Location lookup for weather and air quality.
    Location(Coordinates),
}

impl NormalizedParams {
    pub fn coin_id(&self) -> Option<&str> {
        match self {
            NormalizedParams::Coin { coin_id, .. } => Some(coin_id),
            NormalizedParams::Location(_) => None,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            NormalizedParams::Location(coordinates) => Some(*coordinates),
            NormalizedParams::Coin { .. } => None,
        }
    }
}

/// A category whose identifier resolved to provider parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCategory {
    pub category: Category,
    pub params: NormalizedParams,
}
