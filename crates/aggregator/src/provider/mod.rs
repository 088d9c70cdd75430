//! Category provider abstractions and implementations.
//!
//! This module contains:
//! - The `CategoryProvider` trait that all providers implement
//! - Concrete provider implementations (CoinGecko, Open-Meteo weather and air quality)
//!
//! # Provider Resolution
//!
//! Providers receive pre-resolved `NormalizedParams`. Mapping asset codes and
//! country names to those parameters happens in the resolver module, not in the
//! providers themselves.

mod http;
mod traits;

pub mod coingecko;
pub mod open_meteo;

pub use traits::CategoryProvider;
