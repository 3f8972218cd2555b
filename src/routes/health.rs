use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Root endpoint - basic status
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Titlovi Addon",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "manifest": "/manifest.json"
    }))
}

/// Upstream settings shown in the health report
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpstreamStats {
    origin: String,
    timeout_ms: u64,
    download_concurrency: usize,
}

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    uptime: u64,
    environment: String,
    upstream: UpstreamStats,
}

/// GET /health - process status and upstream configuration
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let client = state.subtitles.client();
    let transport = client.transport();

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        environment: state.config.app_env.clone(),
        upstream: UpstreamStats {
            origin: transport.origin.clone(),
            timeout_ms: transport.timeout.as_millis() as u64,
            download_concurrency: client.concurrency(),
        },
    })
}

/// GET /metrics - Prometheus metrics
pub async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            buffer,
        ),
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("content-type", "text/plain")],
                b"Internal Server Error".to_vec(),
            )
        }
    }
}

/// Liveness probe (for Kubernetes)
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}
