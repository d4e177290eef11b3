//! Outbound text-generation seam.
//!
//! The review service only ever sees "prompt text in, reply text out"; the
//! concrete vendor schema stays behind [`GeminiClient`].

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

/// Opaque provider of raw reply text for a rendered prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Provider failure, surfaced to the caller before normalization is ever
/// attempted. The normalizer is never asked to process "no response".
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("provider response did not contain a candidate text body")]
    MalformedEnvelope,
}
