//! reqtally server library entry.
//!
//! Wires the config, shared state, instrumented router, and the metrics
//! exposition listener into a runnable server. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod exposition;
pub mod handlers;
pub mod middleware;
pub mod ops;
pub mod router;
