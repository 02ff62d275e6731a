//! Prometheus recorder setup and the latency middleware.
//!
//! Histograms are rendered by the exporter as quantile summaries; the
//! quantiles below mirror the objectives the service advertises
//! (p50/p90/p99/p99.9). Series are described at install time; the
//! exporter only renders a series after its first observation, so a
//! pre-traffic scrape is an empty (still valid) body.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use dawdle_core::{DawdleError, Result};

/// Latency summary, labelled by handler.
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
/// Monotonic request counter, labelled by handler.
pub const REQUESTS_TOTAL: &str = "http_requests_total";
/// Label value identifying the greeting handler.
pub const HANDLER_NAME: &str = "hello_world";

const QUANTILES: &[f64] = &[0.5, 0.9, 0.99, 0.999];

/// Install the process-wide recorder and return the render handle.
///
/// Fatal on failure; a second install in the same process fails, which
/// is why the handle is threaded through `AppState` rather than
/// re-created.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_quantiles(QUANTILES)
        .map_err(|e| DawdleError::Recorder(e.to_string()))?
        .install_recorder()
        .map_err(|e| DawdleError::Recorder(e.to_string()))?;
    describe_series();
    Ok(handle)
}

fn describe_series() {
    metrics::describe_counter!(
        REQUESTS_TOTAL,
        "Requests answered by the greeting handler."
    );
    metrics::describe_histogram!(
        REQUEST_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Wall-clock latency of the greeting handler."
    );
}

/// Latency middleware around the greeting route.
///
/// Measures entry-to-exit wall-clock time and records it, without
/// touching the response. The metrics route is registered outside this
/// layer, so scrapes do not observe themselves.
pub async fn record_latency(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let res = next.run(req).await;
    let elapsed = start.elapsed();

    metrics::counter!(REQUESTS_TOTAL, "handler" => HANDLER_NAME).increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "handler" => HANDLER_NAME)
        .record(elapsed.as_secs_f64());

    res
}
