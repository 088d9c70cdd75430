//! Provider registry and aggregation engine.
//!
//! This module provides orchestration for category providers, including:
//! - Provider registration, one per category
//! - Concurrent fan-out with a shared per-call timeout
//! - Per-category omission diagnostics

mod aggregator;
mod provider_registry;
mod report;

pub use aggregator::Aggregator;
pub use provider_registry::ProviderRegistry;
pub use report::{AggregateReport, CategoryAttempt, CategoryOutcome};
