//! Health Check Handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub subscribers: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.settings.storage.backend.as_str(),
        subscribers: state.gateway.subscriber_count(),
    })
}
