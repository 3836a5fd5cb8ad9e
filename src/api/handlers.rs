//! HTTP handlers: the grid client page and the health check.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;

/// The fixed client page, embedded at compile time so the binary is
/// self-contained.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /` — Serve the grid client page.
pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    connections: usize,
    annotations: usize,
}

/// `GET /health` — Service health status and live relay counters.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.relay.stats().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            connections: stats.connections,
            annotations: stats.annotations,
        }),
    )
}
