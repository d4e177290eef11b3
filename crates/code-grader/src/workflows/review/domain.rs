use serde::{Deserialize, Serialize};

/// Raw submission payload as received from the transport layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSubmission {
    pub code: String,
    pub language: String,
}

/// Validated grading request. Both fields are non-empty after trimming; the
/// stored strings keep their original whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    code: String,
    language: String,
}

impl EvaluationRequest {
    pub fn new(
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, RequestValidationError> {
        let code = code.into();
        let language = language.into();

        if code.trim().is_empty() {
            return Err(RequestValidationError::EmptyCode);
        }
        if language.trim().is_empty() {
            return Err(RequestValidationError::EmptyLanguage);
        }

        Ok(Self { code, language })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl TryFrom<ReviewSubmission> for EvaluationRequest {
    type Error = RequestValidationError;

    fn try_from(submission: ReviewSubmission) -> Result<Self, Self::Error> {
        Self::new(submission.code, submission.language)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestValidationError {
    #[error("code must not be empty")]
    EmptyCode,
    #[error("language must not be empty")]
    EmptyLanguage,
}

/// Per-criterion scores recovered from the model reply. Fields that could not
/// be recovered hold 0 rather than being absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub syntax: u8,
    pub logic: u8,
    pub methods: u8,
    pub objective: u8,
}

impl ScoreBreakdown {
    /// Always recomputed from the four fields. A total printed by the model is
    /// informational only and can drift from its own per-criterion values.
    pub fn total(&self) -> u8 {
        self.syntax + self.logic + self.methods + self.objective
    }
}

/// Structured outcome of one grading pass, with the raw reply retained
/// verbatim for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub breakdown: ScoreBreakdown,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub improved_code: String,
    pub raw_text: String,
}
