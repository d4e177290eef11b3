use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{EvaluationResult, ReviewSubmission, ScoreBreakdown};
use super::provider::TextGenerator;
use super::service::{CodeReviewService, ReviewServiceError};

/// Router builder exposing the HTTP endpoint for review submissions.
pub fn review_router<G>(service: Arc<CodeReviewService<G>>) -> Router
where
    G: TextGenerator + 'static,
{
    Router::new()
        .route("/api/v1/reviews", post(submit_handler::<G>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequestBody {
    pub(crate) code: String,
    pub(crate) language: String,
    /// Include the verbatim model reply in the response for diagnostics.
    #[serde(default)]
    pub(crate) include_raw_text: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReviewResponseBody {
    pub(crate) total_score: u8,
    pub(crate) breakdown: ScoreBreakdown,
    pub(crate) summary: String,
    pub(crate) suggestions: Vec<String>,
    pub(crate) improved_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) raw_text: Option<String>,
}

impl ReviewResponseBody {
    pub(crate) fn from_result(result: EvaluationResult, include_raw_text: bool) -> Self {
        let EvaluationResult {
            breakdown,
            summary,
            suggestions,
            improved_code,
            raw_text,
        } = result;

        Self {
            total_score: breakdown.total(),
            breakdown,
            summary,
            suggestions,
            improved_code,
            raw_text: include_raw_text.then_some(raw_text),
        }
    }
}

pub(crate) async fn submit_handler<G>(
    State(service): State<Arc<CodeReviewService<G>>>,
    axum::Json(body): axum::Json<ReviewRequestBody>,
) -> Response
where
    G: TextGenerator + 'static,
{
    let ReviewRequestBody {
        code,
        language,
        include_raw_text,
    } = body;

    match service.review(ReviewSubmission { code, language }).await {
        Ok(result) => {
            let view = ReviewResponseBody::from_result(result, include_raw_text);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ReviewServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(ReviewServiceError::Provider(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
