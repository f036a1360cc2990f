//! Prometheus metrics handler
//!
//! Exposes `GET /metrics` returning Prometheus text format.

use std::sync::OnceLock;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Shared state for the metrics endpoint
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
}

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Handle to the process-wide Prometheus recorder, installing it on first use.
///
/// If another recorder is already installed, a detached handle is returned
/// and `/metrics` renders an empty page.
pub fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "Prometheus recorder not installed");
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// `GET /metrics` — Prometheus scrape endpoint (no auth)
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    let body = state.handle.render();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
