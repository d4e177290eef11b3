use std::sync::Arc;

use async_trait::async_trait;

use crate::workflows::review::normalizer::{NormalizerConfig, ResponseNormalizer};
use crate::workflows::review::provider::{ProviderError, TextGenerator};
use crate::workflows::review::service::CodeReviewService;
use crate::workflows::review::ReviewSubmission;

pub(super) const SAMPLE_CODE: &str = "print('x'";

pub(super) fn submission() -> ReviewSubmission {
    ReviewSubmission {
        code: SAMPLE_CODE.to_string(),
        language: "python".to_string(),
    }
}

/// A reply that follows the requested layout to the letter.
pub(super) fn well_formed_reply() -> String {
    "SCORES\n\
Syntax: 10/30\n\
Logic: 20/30\n\
Methods Used: 15/20\n\
Objective Fulfillment: 18/20\n\
Total: 63/100\n\
\n\
SUMMARY\n\
The snippet attempts to print a string but the call is unterminated.\n\
\n\
SUGGESTIONS\n\
- Close the parenthesis on the print call\n\
- Prefer double quotes for consistency\n\
- Add a trailing newline\n\
\n\
IMPROVED CODE\n\
```python\n\
print('x')\n\
```\n"
        .to_string()
}

pub(super) struct ScriptedGenerator {
    reply: String,
}

impl ScriptedGenerator {
    pub(super) fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.reply.clone())
    }
}

pub(super) struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Status {
            status: 503,
            detail: "model overloaded".to_string(),
        })
    }
}

pub(super) fn build_service(reply: &str) -> Arc<CodeReviewService<ScriptedGenerator>> {
    Arc::new(CodeReviewService::new(
        Arc::new(ScriptedGenerator::new(reply)),
        NormalizerConfig::default(),
    ))
}

pub(super) fn normalizer() -> ResponseNormalizer {
    ResponseNormalizer::new(NormalizerConfig::default())
}
