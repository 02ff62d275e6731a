//! dawdle server library entry.
//!
//! Wires the delay sampler, the greeting handler, the latency
//! instrumentation, and the metrics endpoint into one axum app. Consumed
//! by the binary (`main.rs`) and by the integration tests.

pub mod app_state;
pub mod greet;
pub mod obs;
pub mod ops;
pub mod router;
