//! Resolution traits for the aggregator crate.
//!
//! Defines the abstraction for turning caller-facing identifiers into
//! provider-specific fetch parameters.

use crate::models::{AggregateRequest, Category, CategoryRequest, ResolvedCategory};

/// A requested category whose identifier could not be resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DroppedCategory {
    pub category: Category,
    pub identifier: String,
}

/// Normalizer output for one aggregate request.
#[derive(Clone, Debug, Default)]
pub struct NormalizedRequest {
    /// Categories with provider parameters, in wire order.
    pub resolved: Vec<ResolvedCategory>,
    /// Requested categories with unknown identifiers.
    pub dropped: Vec<DroppedCategory>,
}

impl NormalizedRequest {
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Maps a single category request to provider parameters.
///
/// Returning `None` means the identifier is unknown; the category is
/// dropped silently, never errored.
pub trait CategoryResolver: Send + Sync {
    fn resolve(&self, request: &CategoryRequest) -> Option<ResolvedCategory>;

    /// Resolve every present category of an aggregate request.
    fn normalize(&self, request: &AggregateRequest) -> NormalizedRequest {
        let mut normalized = NormalizedRequest::default();
        for category_request in request.category_requests() {
            match self.resolve(&category_request) {
                Some(resolved) => normalized.resolved.push(resolved),
                None => normalized.dropped.push(DroppedCategory {
                    category: category_request.category(),
                    identifier: category_request.identifier().to_string(),
                }),
            }
        }
        normalized
    }
}
