//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use reqtally_core::error::{ReqTallyError, Result};

pub use schema::{ServerConfig, ServerSection, TelemetrySection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ReqTallyError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| ReqTallyError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load config from `path`, falling back to compiled-in defaults when the
/// file does not exist.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        Ok(ServerConfig::default())
    }
}
