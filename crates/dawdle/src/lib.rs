//! Top-level facade crate for dawdle.
//!
//! Re-exports the core types and the server library so users can depend
//! on a single crate.

pub mod core {
    pub use dawdle_core::*;
}

pub mod server {
    pub use dawdle_server::*;
}
