use thiserror::Error;

/// Failure taxonomy for a single report request.
///
/// Every variant is terminal for the request that produced it: the core
/// performs no retry, backoff, or partial-result recovery. The caller
/// decides whether to let the user resubmit.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Empty response: the model returned no text")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }

    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}
