//! Observability: recorder install + latency instrumentation.
//!
//! The recorder is installed once at startup; the `/metrics` handler in
//! `ops` renders from the handle it returns.

pub mod metrics;
