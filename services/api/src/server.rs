use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_review_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use code_grader::config::AppConfig;
use code_grader::error::AppError;
use code_grader::telemetry;
use code_grader::workflows::review::{CodeReviewService, GeminiClient, NormalizerConfig};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let generator = Arc::new(GeminiClient::new(config.provider.clone())?);
    let service = Arc::new(CodeReviewService::new(generator, NormalizerConfig::default()));

    let app = with_review_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, model = %config.provider.model, "code review grader ready");

    axum::serve(listener, app).await?;
    Ok(())
}
