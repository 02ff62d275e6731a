//! The greeting handler.
//!
//! Answers any request with `Hello World\n` after suspending for one
//! sampled delay. The sleep is cooperative (`tokio::time::sleep`), so
//! concurrent requests never block each other.

use axum::extract::State;
use axum::response::IntoResponse;

use crate::app_state::AppState;

/// Fixed response body, newline included.
pub const GREETING: &str = "Hello World\n";

/// Catch-all handler: any method, any path, always 200.
///
/// Request content is deliberately ignored. The handler does not watch
/// for client disconnects; it completes its sleep and writes the
/// response regardless.
pub async fn hello(State(state): State<AppState>) -> impl IntoResponse {
    tokio::time::sleep(state.delay().sample()).await;
    GREETING
}
