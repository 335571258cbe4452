//! Core building blocks for reqtally.
//!
//! Holds the shared error type and the metrics registry used by both the
//! instrumented router and the exposition endpoint.

pub mod error;
pub mod metrics;
