use std::fmt;

/// Why a requested category is absent from an aggregate response.
///
/// Callers of the wire API only see the omission itself. The reason is kept
/// for logs and for library callers that need to tell an unrecognized
/// identifier apart from a provider outage.
///
/// | Reason | Origin |
/// |--------|--------|
/// | `UnknownIdentifier` | Resolver: asset or country not in the lookup tables |
/// | `NoProvider` | Registry: nothing registered for the category |
/// | `Timeout` | Outbound call exceeded the shared timeout |
/// | `HttpStatus` | Provider answered with a non-2xx status |
/// | `Transport` | Connection or body transfer failed |
/// | `MalformedResponse` | Invalid JSON or missing expected fields |
/// | `EmptyResult` | Provider produced no fields |
/// | `Defect` | Wiring bug; the aggregate call fails instead |
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OmissionReason {
    UnknownIdentifier { identifier: String },
    NoProvider,
    Timeout,
    HttpStatus { status: u16 },
    Transport { message: String },
    MalformedResponse { message: String },
    EmptyResult,
    Defect { message: String },
}

impl OmissionReason {
    /// True when the omission comes from a provider or network failure
    /// rather than from the caller's input.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Timeout
                | Self::HttpStatus { .. }
                | Self::Transport { .. }
                | Self::MalformedResponse { .. }
                | Self::EmptyResult
        )
    }
}

impl fmt::Display for OmissionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdentifier { identifier } => {
                write!(f, "unknown identifier '{}'", identifier)
            }
            Self::NoProvider => f.write_str("no provider"),
            Self::Timeout => f.write_str("timeout"),
            Self::HttpStatus { status } => write!(f, "http status {}", status),
            Self::Transport { message } => write!(f, "transport: {}", message),
            Self::MalformedResponse { message } => write!(f, "malformed response: {}", message),
            Self::EmptyResult => f.write_str("empty result"),
            Self::Defect { message } => write!(f, "defect: {}", message),
        }
    }
}
