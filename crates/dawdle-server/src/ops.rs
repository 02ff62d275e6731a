//! Operational HTTP endpoints.
//!
//! - `/metrics` : Prometheus text format

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

/// `/metrics` — read-only snapshot of the aggregation state.
/// Served for any method; scrapers use GET, but nothing here depends
/// on the verb.
pub async fn metrics(axum::extract::State(state): axum::extract::State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}
