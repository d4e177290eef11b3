//! Code grading workflow: prompt construction, provider invocation, and
//! defensive normalization of the model's free-form reply.
//!
//! The prompt builder asks nicely for a labeled layout; the normalizer never
//! assumes it got one. Keeping those two concerns independent is what lets the
//! service return a complete result for every reply the provider produces.

pub mod domain;
pub mod normalizer;
pub mod prompt;
pub mod provider;
pub mod router;
pub mod rubric;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    EvaluationRequest, EvaluationResult, RequestValidationError, ReviewSubmission, ScoreBreakdown,
};
pub use normalizer::{
    NormalizerConfig, ResponseNormalizer, DEFAULT_SUGGESTION, NO_IMPROVEMENT_SENTINEL,
    NO_SUMMARY_SENTINEL,
};
pub use prompt::build_prompt;
pub use provider::{GeminiClient, ProviderError, TextGenerator};
pub use router::review_router;
pub use rubric::{Criterion, RUBRIC};
pub use service::{CodeReviewService, ReviewServiceError};
