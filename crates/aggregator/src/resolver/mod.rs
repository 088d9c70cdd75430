//! Identifier resolution for gateway providers.
//!
//! This module normalizes caller-facing identifiers into provider parameters:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     TableResolver                           │
//! │                                                             │
//! │  economy  {asset: "BTC"}      → Coin { coin_id: "bitcoin" } │
//! │  weather  {country: "Algeria"} → Location { lat, lon }      │
//! │  air      {country: "algeria"} → Location { lat, lon }      │
//! │                                                             │
//! │  unknown identifier           → dropped (no error)          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups are case-insensitive and ignore surrounding whitespace. Weather
//! and air quality share the same country table.

mod lookup_tables;
mod table_resolver;
mod traits;

pub use lookup_tables::LookupTables;
pub use table_resolver::TableResolver;
pub use traits::{CategoryResolver, DroppedCategory, NormalizedRequest};
