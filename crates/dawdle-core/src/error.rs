//! Shared error type across dawdle crates.
//!
//! There is exactly one error class: fatal startup/listener failures.
//! The request handlers themselves cannot fail, so nothing here is
//! recoverable; every variant terminates the process after being logged.

use std::net::SocketAddr;

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, DawdleError>;

/// Fatal error surface for the server lifecycle.
#[derive(Debug, Error)]
pub enum DawdleError {
    /// The listener could not bind (e.g., port already in use).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The serve loop failed irrecoverably after a successful bind.
    #[error("serve loop failed: {0}")]
    Serve(#[source] std::io::Error),
    /// The Prometheus recorder could not be installed at startup.
    #[error("metrics recorder install failed: {0}")]
    Recorder(String),
}
