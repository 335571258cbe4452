//! Shared application state.
//!
//! The registry is injected by handle rather than held as a process-global,
//! so tests can run against isolated instances.

use std::sync::Arc;

use reqtally_core::metrics::{CounterVec, Registry};

use crate::config::ServerConfig;

/// Name of the per-route request counter. Rendered as `http_req_counter`
/// after exposition-name sanitization.
pub const REQUEST_COUNTER: &str = "http.req.counter";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    registry: Arc<Registry>,
    requests: Arc<CounterVec>,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_registry(cfg, Arc::new(Registry::new()))
    }

    /// Build state around an externally owned registry.
    pub fn with_registry(cfg: ServerConfig, registry: Arc<Registry>) -> Self {
        let requests = registry.counter(REQUEST_COUNTER);
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                requests,
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.inner.registry)
    }

    /// Handle to the request counter used by the counting middleware.
    pub fn requests(&self) -> &CounterVec {
        &self.inner.requests
    }
}
