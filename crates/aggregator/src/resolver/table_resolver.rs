//! Table resolver - deterministic identifier → parameter resolution.
//!
//! Asset codes map to CoinGecko coin ids. Country names map to coordinates,
//! shared by the weather and air quality categories.

use std::sync::Arc;

use crate::models::{CategoryRequest, NormalizedParams, ResolvedCategory};

use super::lookup_tables::{normalize_key, LookupTables};
use super::traits::CategoryResolver;

/// Resolves category requests from static lookup tables.
pub struct TableResolver {
    tables: Arc<LookupTables>,
}

impl TableResolver {
    /// Create a resolver over the embedded tables.
    pub fn new() -> Self {
        Self {
            tables: LookupTables::builtin(),
        }
    }

    /// Create a resolver over custom tables.
    pub fn with_tables(tables: Arc<LookupTables>) -> Self {
        Self { tables }
    }
}

impl Default for TableResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryResolver for TableResolver {
    fn resolve(&self, request: &CategoryRequest) -> Option<ResolvedCategory> {
        let params = match request {
            CategoryRequest::Economy { asset } => NormalizedParams::Coin {
                coin_id: self.tables.coin_id(asset)?,
                asset: normalize_key(asset),
            },
            CategoryRequest::Weather { country } | CategoryRequest::AirQuality { country } => {
                NormalizedParams::Location(self.tables.coordinates(country)?)
            }
        };

        Some(ResolvedCategory {
            category: request.category(),
            params,
        })
    }
}
