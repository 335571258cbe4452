//! Shared error type across reqtally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReqTallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ReqTallyError {
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("init: {0}")]
    Init(String),
    #[error("internal: {0}")]
    Internal(String),
}
