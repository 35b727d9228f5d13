//! HTTP surface
//!
//! Axum router for the admin frontend. Application-level failures are always
//! HTTP 200 with the status carried in-body; the only non-200 responses come
//! from the framework itself (malformed request bodies).

pub mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::diaglog::DiagnosticLog;
use crate::error::AiError;
use crate::invoker::{GeminiInvoker, ModelInvoker};
use crate::pipeline::Pipeline;

/// Shared request-handling context, resolved once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Build the pipeline from resolved configuration.
pub fn build_pipeline(config: &AppConfig) -> Result<Pipeline, AiError> {
    let invoker: Option<Arc<dyn ModelInvoker>> = match &config.gemini {
        Some(gemini) => Some(Arc::new(GeminiInvoker::new(gemini.clone())?)),
        None => None,
    };
    let diag = DiagnosticLog::new(&config.diag_log_path);
    Ok(Pipeline::new(invoker, diag))
}

/// Build the application router with permissive CORS.
pub fn router(pipeline: Pipeline) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/ai/research", post(handlers::research))
        .route("/api/ai/generate-tags", post(handlers::generate_tags))
        .route("/api/ai/translate", post(handlers::translate))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { pipeline })
}

/// Bind and serve until the process exits.
pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let pipeline = build_pipeline(&config)?;
    if config.gemini.is_none() {
        info!("no GEMINI_API_KEY configured, research requests will serve mock data");
    }

    let app = router(pipeline);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "alpscout AI engine ready");
    axum::serve(listener, app).await?;
    Ok(())
}
