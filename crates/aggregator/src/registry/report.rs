//! Per-category outcome tracking for aggregation diagnostics.

use std::time::Duration;

use crate::errors::OmissionReason;
use crate::models::{Category, ProviderId};

/// What happened to one requested category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryOutcome {
    Included,
    Omitted(OmissionReason),
}

/// Record of a single requested category during an aggregate call.
#[derive(Clone, Debug)]
pub struct CategoryAttempt {
    pub category: Category,
    /// `None` when no provider was called (unknown identifier, no provider).
    pub provider_id: Option<ProviderId>,
    pub outcome: CategoryOutcome,
    /// Wall-clock time of the provider call, when one was made.
    pub elapsed: Option<Duration>,
}

/// Detailed result of an aggregate call.
#[derive(Clone, Debug, Default)]
pub struct AggregateReport {
    pub attempts: Vec<CategoryAttempt>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record_included(
        &mut self,
        category: Category,
        provider_id: ProviderId,
        elapsed: Duration,
    ) {
        self.attempts.push(CategoryAttempt {
            category,
            provider_id: Some(provider_id),
            outcome: CategoryOutcome::Included,
            elapsed: Some(elapsed),
        });
    }

    pub fn record_omitted(
        &mut self,
        category: Category,
        provider_id: Option<ProviderId>,
        reason: OmissionReason,
        elapsed: Option<Duration>,
    ) {
        self.attempts.push(CategoryAttempt {
            category,
            provider_id,
            outcome: CategoryOutcome::Omitted(reason),
            elapsed,
        });
    }

    /// Outcome for `category`, or `None` if it was not requested.
    pub fn outcome(&self, category: Category) -> Option<&CategoryOutcome> {
        self.attempts
            .iter()
            .find(|a| a.category == category)
            .map(|a| &a.outcome)
    }

    /// Omission reason for `category`, if it was requested and omitted.
    pub fn omission_reason(&self, category: Category) -> Option<&OmissionReason> {
        match self.outcome(category)? {
            CategoryOutcome::Omitted(reason) => Some(reason),
            CategoryOutcome::Included => None,
        }
    }

    pub fn included(&self) -> Vec<Category> {
        self.attempts
            .iter()
            .filter(|a| a.outcome == CategoryOutcome::Included)
            .map(|a| a.category)
            .collect()
    }

    pub fn omitted(&self) -> Vec<(Category, &OmissionReason)> {
        self.attempts
            .iter()
            .filter_map(|a| match &a.outcome {
                CategoryOutcome::Omitted(reason) => Some((a.category, reason)),
                CategoryOutcome::Included => None,
            })
            .collect()
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        if self.attempts.is_empty() {
            return "nothing requested".to_string();
        }
        self.attempts
            .iter()
            .map(|a| {
                let provider = a.provider_id.as_deref().unwrap_or("-");
                match &a.outcome {
                    CategoryOutcome::Included => format!("{}@{}: OK", a.category, provider),
                    CategoryOutcome::Omitted(reason) => {
                        format!("{}@{}: OMITTED ({})", a.category, provider, reason)
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
