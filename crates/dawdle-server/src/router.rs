//! Axum router wiring.
//!
//! `/metrics` is routed explicitly; every other method/path combination
//! falls through to the greeting handler. The latency layer is applied
//! before the metrics route is added, so only the greeting traffic is
//! instrumented.

use axum::{middleware, routing::any, Router};

use crate::{app_state::AppState, greet, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(greet::hello)
        .layer(middleware::from_fn(obs::metrics::record_latency))
        .route("/metrics", any(ops::metrics))
        .with_state(state)
}
