//! Error types and omission classification for the aggregator crate.
//!
//! This module provides:
//! - [`GatewayError`]: The main error enum for provider fetches
//! - [`OmissionReason`]: Why a requested category is missing from a response

mod omission;

pub use omission::OmissionReason;

use thiserror::Error;

/// Errors that can occur while fetching one category.
///
/// Every variant except [`ParamsMismatch`](Self::ParamsMismatch) is absorbed by the
/// aggregator and turned into an [`OmissionReason`] via
/// [`omission_reason`](Self::omission_reason).
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The provider call did not finish within the outbound timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// Connection, TLS or body transfer failure.
    #[error("Transport error: {provider} - {source}")]
    Transport {
        /// The provider being called
        provider: String,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The body was not valid JSON, or JSON of an unexpected shape.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// Parser or shape error description
        message: String,
    },

    /// A field the provider must return was missing.
    #[error("Missing field '{field}' in response from {provider}")]
    MissingField {
        /// The provider that returned the body
        provider: String,
        /// Dotted path of the missing field
        field: String,
    },

    /// The provider produced a result with no fields.
    #[error("Empty result: {provider}")]
    EmptyResult {
        /// The provider that produced the result
        provider: String,
    },

    /// No provider is registered for a resolved category.
    #[error("No provider registered for category: {category}")]
    NoProviderRegistered {
        /// Wire name of the category
        category: String,
    },

    /// A provider was handed parameters of the wrong kind.
    /// This is a wiring defect, not a provider failure.
    #[error("Provider {provider} received unsupported parameters: {params}")]
    ParamsMismatch {
        /// The provider that received the parameters
        provider: String,
        /// Debug rendering of the parameters
        params: String,
    },
}

impl GatewayError {
    /// Wrap a client error, classifying client-side timeouts as [`GatewayError::Timeout`].
    pub fn transport(provider: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Transport {
                provider: provider.to_string(),
                source,
            }
        }
    }

    /// Whether this error is a programming defect that must reach the caller.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::ParamsMismatch { .. })
    }

    /// Returns the omission reason recorded when this error drops a category.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_gateway_aggregator::errors::{GatewayError, OmissionReason};
    ///
    /// let error = GatewayError::HttpStatus { provider: "OPEN_METEO".to_string(), status: 500 };
    /// assert_eq!(error.omission_reason(), OmissionReason::HttpStatus { status: 500 });
    /// ```
    pub fn omission_reason(&self) -> OmissionReason {
        match self {
            Self::Timeout { .. } => OmissionReason::Timeout,
            Self::HttpStatus { status, .. } => OmissionReason::HttpStatus { status: *status },
            Self::Transport { source, .. } => OmissionReason::Transport {
                message: source.to_string(),
            },
            Self::MalformedResponse { message, .. } => OmissionReason::MalformedResponse {
                message: message.clone(),
            },
            Self::MissingField { field, .. } => OmissionReason::MalformedResponse {
                message: format!("missing field '{}'", field),
            },
            Self::EmptyResult { .. } => OmissionReason::EmptyResult,
            Self::NoProviderRegistered { .. } => OmissionReason::NoProvider,
            Self::ParamsMismatch { params, .. } => OmissionReason::Defect {
                message: params.clone(),
            },
        }
    }
}
