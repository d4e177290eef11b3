//! Defensive extraction of structured grading fields from a free-form model
//! reply.
//!
//! Normalization is total: every step has a documented default, so degenerate
//! input (empty string, an HTML error page, truncated text) produces a
//! degraded but complete result instead of an error. Genuine failure is
//! detected one layer up, before this module ever runs.

mod fences;
mod scores;
mod sections;

use super::domain::{EvaluationRequest, EvaluationResult, ScoreBreakdown};
use scores::ScorePatterns;

/// Substituted when no labeled summary section can be located.
pub const NO_SUMMARY_SENTINEL: &str = "no summary provided";

/// Substituted when the model's only code block echoes the input unchanged.
pub const NO_IMPROVEMENT_SENTINEL: &str = "no significant improvement suggested";

/// Single-item fallback used when no suggestion bullets survive extraction.
pub const DEFAULT_SUGGESTION: &str = "No specific suggestions were provided.";

/// Static knobs for extraction behavior.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Upper bound on the returned suggestion list.
    pub max_suggestions: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self { max_suggestions: 5 }
    }
}

/// Outcome of one extraction step. The public result flattens both arms to a
/// value, but keeping them distinct internally preserves the option to tell
/// "the model said 0" apart from "no score was found" without re-parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extraction<T> {
    Found(T),
    Defaulted(T),
}

impl<T> Extraction<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Extraction::Found(value) | Extraction::Defaulted(value) => value,
        }
    }

    #[cfg(test)]
    pub(crate) fn was_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }
}

/// Turns a raw model reply into a complete, well-typed result.
pub struct ResponseNormalizer {
    config: NormalizerConfig,
    patterns: ScorePatterns,
}

impl ResponseNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            patterns: ScorePatterns::compile(),
        }
    }

    /// Never fails. A deterministic, side-effect-free function of the reply
    /// text plus this normalizer's static configuration.
    pub fn normalize(&self, raw_text: &str, request: &EvaluationRequest) -> EvaluationResult {
        let [syntax, logic, methods, objective] = self.patterns.extract_all(raw_text);
        let breakdown = ScoreBreakdown {
            syntax: syntax.into_inner(),
            logic: logic.into_inner(),
            methods: methods.into_inner(),
            objective: objective.into_inner(),
        };

        let summary = sections::summary(raw_text).into_inner();
        let suggestions =
            sections::suggestions(raw_text, self.config.max_suggestions).into_inner();
        let improved_code = fences::improved_code(raw_text, request.code()).into_inner();

        EvaluationResult {
            breakdown,
            summary,
            suggestions,
            improved_code,
            raw_text: raw_text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::review::domain::EvaluationRequest;

    fn request() -> EvaluationRequest {
        EvaluationRequest::new("print('x'", "python").expect("valid request")
    }

    #[test]
    fn empty_reply_yields_the_degraded_default_result() {
        let normalizer = ResponseNormalizer::new(NormalizerConfig::default());
        let result = normalizer.normalize("", &request());

        assert_eq!(result.breakdown.total(), 0);
        assert_eq!(result.summary, NO_SUMMARY_SENTINEL);
        assert_eq!(result.suggestions, vec![DEFAULT_SUGGESTION.to_string()]);
        assert_eq!(result.improved_code, "print('x'");
        assert_eq!(result.raw_text, "");
    }

    #[test]
    fn unstructured_garbage_still_produces_a_complete_result() {
        let normalizer = ResponseNormalizer::new(NormalizerConfig::default());
        let result = normalizer.normalize(
            "<html><body>502 Bad Gateway</body></html>\x00\x01\x02",
            &request(),
        );

        assert_eq!(result.breakdown, Default::default());
        assert_eq!(result.summary, NO_SUMMARY_SENTINEL);
        assert!(!result.suggestions.is_empty());
        assert_eq!(result.improved_code, "print('x'");
    }

    #[test]
    fn normalization_is_idempotent() {
        let normalizer = ResponseNormalizer::new(NormalizerConfig::default());
        let reply = "SCORES\nSyntax: 12/30\n\nSUMMARY: fine.\n\nSUGGESTIONS\n- tidy up\n";
        let first = normalizer.normalize(reply, &request());
        let second = normalizer.normalize(reply, &request());
        assert_eq!(first, second);
    }
}
