use async_trait::async_trait;

use crate::domain::{DomainError, GenerationRequest};

/// An interface for submitting a structured-generation request to a hosted
/// model and receiving the raw response text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. Consumers (e.g. [`crate::application::AnalyzeGradesUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Submit `request` and return the model's response text verbatim.
    ///
    /// The text may be empty; interpreting it (including the empty case) is
    /// the caller's responsibility.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError>;
}
