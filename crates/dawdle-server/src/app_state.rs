//! Shared application state for the dawdle server.
//!
//! Owns the two pieces of process-wide shared state: the delay sampler
//! and the Prometheus handle. Both are injected at construction instead
//! of living as module-level globals.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use dawdle_core::delay::DelaySampler;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    delay: DelaySampler,
    metrics: PrometheusHandle,
}

impl AppState {
    /// Build application state around an installed recorder handle.
    /// The delay sampler is seeded here, once, from the wall clock.
    pub fn new(metrics: PrometheusHandle) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                delay: DelaySampler::seeded_from_time(),
                metrics,
            }),
        }
    }

    /// The shared delay sampler.
    pub fn delay(&self) -> &DelaySampler {
        &self.inner.delay
    }

    /// The Prometheus render handle for `/metrics`.
    pub fn metrics(&self) -> &PrometheusHandle {
        &self.inner.metrics
    }
}
