//! dawdle core: the delay sampler and the error surface.
//!
//! This crate holds the runtime-free pieces of dawdle so they can be
//! exercised without an HTTP stack: the pseudo-random delay generator and
//! the fatal error type shared with the server crate.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DawdleError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod delay;
pub mod error;

/// Shared result type.
pub use error::{DawdleError, Result};
