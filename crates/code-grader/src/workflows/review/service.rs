use std::sync::Arc;

use super::domain::{EvaluationRequest, EvaluationResult, RequestValidationError, ReviewSubmission};
use super::normalizer::{NormalizerConfig, ResponseNormalizer};
use super::prompt::build_prompt;
use super::provider::{ProviderError, TextGenerator};

/// Service composing the prompt builder, the provider seam, and the
/// normalizer. Holds no cross-request state; concurrent reviews are
/// independent.
pub struct CodeReviewService<G> {
    generator: Arc<G>,
    normalizer: ResponseNormalizer,
}

impl<G> CodeReviewService<G>
where
    G: TextGenerator + 'static,
{
    pub fn new(generator: Arc<G>, config: NormalizerConfig) -> Self {
        Self {
            generator,
            normalizer: ResponseNormalizer::new(config),
        }
    }

    /// Grade one submission end to end.
    ///
    /// Validation and provider failures surface here; once a reply text
    /// exists, normalization always yields a complete result.
    pub async fn review(
        &self,
        submission: ReviewSubmission,
    ) -> Result<EvaluationResult, ReviewServiceError> {
        let request = EvaluationRequest::try_from(submission)?;
        let prompt = build_prompt(request.code(), request.language());
        let raw_text = self.generator.generate(&prompt).await?;
        Ok(self.normalizer.normalize(&raw_text, &request))
    }
}

/// Error raised by the review service.
#[derive(Debug, thiserror::Error)]
pub enum ReviewServiceError {
    #[error(transparent)]
    Validation(#[from] RequestValidationError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
