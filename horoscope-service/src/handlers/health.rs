use crate::services::get_metrics;
use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "horoscope-sender";

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    let timestamp = Utc::now().timestamp_millis() as f64 / 1000.0;
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": timestamp
    }))
}

/// Readiness probe.
pub async fn readiness_check() -> impl IntoResponse {
    Json(json!({
        "status": "ready",
        "service": SERVICE_NAME
    }))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("No such endpoint"))
}
