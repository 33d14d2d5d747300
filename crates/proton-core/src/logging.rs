#![forbid(unsafe_code)]

//! Logging re-exports.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so downstream crates can log through a single path. Without the
//! feature the module is empty and call sites gate on
//! `#[cfg(feature = "tracing")]`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};
