//! Prometheus metrics
//!
//! Installs the global recorder and exposes the scrape endpoint. The
//! counters themselves are recorded where the events happen (resolver,
//! classifier, handlers) via the `metrics` macros.

use axum::extract::State;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::state::AppState;

/// Install the global Prometheus recorder. Call once at startup.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder")
}

/// Scrape endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> String {
    match &state.metrics {
        Some(handle) => handle.render(),
        None => String::new(),
    }
}
