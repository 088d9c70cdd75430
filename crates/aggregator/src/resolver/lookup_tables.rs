//! Static identifier lookup tables.
//!
//! Loads `lookups.json` at compile time via `include_str!` and builds the
//! lowercase-keyed maps once via `lazy_static`.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::models::{CoinId, Coordinates};

#[derive(Debug, Deserialize)]
struct LookupCatalog {
    assets: HashMap<String, String>,
    countries: HashMap<String, Coordinates>,
}

/// Asset code → coin id and country name → coordinates.
///
/// Keys are stored lowercase; lookups trim and lowercase the input.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    assets: HashMap<String, CoinId>,
    countries: HashMap<String, Coordinates>,
}

lazy_static! {
    pub(crate) static ref LOOKUPS: Arc<LookupTables> = Arc::new(
        LookupTables::from_json(include_str!("lookups.json")).expect("lookups.json must be valid")
    );
}

impl LookupTables {
    /// Process-wide tables embedded in the binary.
    pub fn builtin() -> Arc<LookupTables> {
        Arc::clone(&LOOKUPS)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let catalog: LookupCatalog = serde_json::from_str(json)?;
        let mut tables = Self::default();
        for (asset, coin_id) in catalog.assets {
            tables.insert_asset(&asset, &coin_id);
        }
        for (country, coordinates) in catalog.countries {
            tables.insert_country(&country, coordinates);
        }
        Ok(tables)
    }

    pub fn insert_asset(&mut self, asset: &str, coin_id: &str) {
        self.assets.insert(normalize_key(asset), Arc::from(coin_id));
    }

    pub fn insert_country(&mut self, country: &str, coordinates: Coordinates) {
        self.countries.insert(normalize_key(country), coordinates);
    }

    pub fn coin_id(&self, asset: &str) -> Option<CoinId> {
        self.assets.get(&normalize_key(asset)).cloned()
    }

    pub fn coordinates(&self, country: &str) -> Option<Coordinates> {
        self.countries.get(&normalize_key(country)).copied()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

pub(crate) fn normalize_key(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let tables = LookupTables::builtin();
        assert!(tables.asset_count() >= 3);
        assert!(tables.country_count() >= 2);
        assert_eq!(tables.coin_id("btc").as_deref(), Some("bitcoin"));
        assert_eq!(tables.coin_id("eth").as_deref(), Some("ethereum"));
        assert_eq!(tables.coin_id("sol").as_deref(), Some("solana"));
        assert!(tables.coordinates("algeria").is_some());
        assert!(tables.coordinates("france").is_some());
    }

    #[test]
    fn test_builtin_tables_are_shared() {
        assert!(Arc::ptr_eq(
            &LookupTables::builtin(),
            &LookupTables::builtin()
        ));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let tables = LookupTables::builtin();
        assert_eq!(tables.coin_id("BTC"), tables.coin_id("btc"));
        assert_eq!(tables.coordinates("  Algeria "), tables.coordinates("algeria"));
    }

    #[test]
    fn test_unknown_identifiers() {
        let tables = LookupTables::builtin();
        assert!(tables.coin_id("doge").is_none());
        assert!(tables.coordinates("atlantis").is_none());
    }

    #[test]
    fn test_from_json_lowercases_keys() {
        let tables = LookupTables::from_json(
            r#"{"assets": {"XMR": "monero"}, "countries": {"Peru": {"latitude": -12.05, "longitude": -77.04}}}"#,
        )
        .unwrap();
        assert_eq!(tables.coin_id("xmr").as_deref(), Some("monero"));
        assert!(tables.coordinates("peru").is_some());
    }
}
