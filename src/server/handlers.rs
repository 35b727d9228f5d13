//! Request handlers

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use super::AppState;
use crate::envelope::ApiEnvelope;
use crate::types::report::LocationReport;
use crate::types::requests::{GenerateTagsRequest, ResearchRequest, TranslateRequest};

/// Liveness payload.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "alpscout AI engine",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn research(
    State(state): State<AppState>,
    Json(req): Json<ResearchRequest>,
) -> Json<ApiEnvelope<LocationReport>> {
    Json(state.pipeline.research(&req).await)
}

pub async fn generate_tags(
    State(state): State<AppState>,
    Json(req): Json<GenerateTagsRequest>,
) -> Json<ApiEnvelope<Value>> {
    Json(state.pipeline.generate_tags(&req).await)
}

pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Json<ApiEnvelope<Value>> {
    Json(state.pipeline.translate(&req).await)
}
