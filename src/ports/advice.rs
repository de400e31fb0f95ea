//! Advice port: Trait for the external generative-text service.
//!
//! This trait abstracts the text-generation API from the application logic.
//! Adapters report typed failures; `AdviceService` decides what the user sees.

/// Errors that can occur while requesting advice.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Cannot reach advice service at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Advice service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse advice response: {0}")]
    ResponseParsing(String),

    #[error("Advice service returned no text")]
    EmptyResponse,
}

/// Trait for text-generation backends.
pub trait AdviceProvider: Send + Sync {
    /// Generate free text for `prompt`. A single attempt, no retries.
    ///
    /// # Errors
    /// Returns `AdviceError` on any transport, status or payload failure.
    fn generate(&self, prompt: &str) -> Result<String, AdviceError>;
}
