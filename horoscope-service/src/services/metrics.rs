//! Metrics collection for horoscope-service.
//!
//! Counters for outbound provider calls and per-channel deliveries, rendered in
//! Prometheus text format on the health server.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Calling it twice is harmless.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => tracing::warn!("Failed to install Prometheus recorder: {}", e),
    }
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record an outbound provider API call.
pub fn record_provider_call(provider: &'static str, status: &'static str) {
    metrics::counter!(
        "horoscope_provider_calls_total",
        "provider" => provider,
        "status" => status
    )
    .increment(1);
}

/// Record the outcome of one delivery channel.
pub fn record_delivery(channel: &'static str, status: &'static str) {
    metrics::counter!(
        "horoscope_deliveries_total",
        "channel" => channel,
        "status" => status
    )
    .increment(1);
}
