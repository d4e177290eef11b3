use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::ProviderConfig;

use super::{ProviderError, TextGenerator};

/// REST client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        )
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": self.config.temperature },
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .http
            .post(self.request_url())
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let envelope: Value = response.json().await?;
        candidate_text(&envelope).ok_or(ProviderError::MalformedEnvelope)
    }
}

/// Extract the single plain-text candidate body from the provider envelope.
fn candidate_text(envelope: &Value) -> Option<String> {
    envelope
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}
