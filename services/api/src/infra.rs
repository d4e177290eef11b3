use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use async_trait::async_trait;
use code_grader::workflows::review::{ProviderError, TextGenerator};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Offline stand-in for the provider, replaying one fixed reply.
pub(crate) struct ScriptedGenerator {
    reply: String,
}

impl ScriptedGenerator {
    pub(crate) fn new(reply: impl Into<String>) -> Self {
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
