//! Metrics exposition listener.
//!
//! Independent secondary listener polled by an external scraper. Started
//! before the primary server binds: if this listener cannot come up the
//! process must not serve at all. The task is explicitly owned (address,
//! shutdown channel, join handle) so tests and graceful shutdown can
//! terminate it deterministically.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use reqtally_core::error::{ReqTallyError, Result};

use crate::{app_state::AppState, ops};

fn build_telemetry_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::metrics))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}

/// Owned handle to the running exposition listener.
#[derive(Debug)]
pub struct Exposition {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Exposition {
    /// Bind and start serving. Bind failure (port already in use, invalid
    /// address) is a fatal initialization error.
    pub async fn start(listen: SocketAddr, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(listen).await.map_err(|e| {
            ReqTallyError::Init(format!("bind telemetry listener {listen}: {e}"))
        })?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| ReqTallyError::Init(format!("telemetry local_addr: {e}")))?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = build_telemetry_router(state);

        let handle = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            if let Err(e) = serve.await {
                tracing::error!(error = %e, "telemetry server failed");
            }
        });

        tracing::info!(%local_addr, "telemetry exposition listening");

        Ok(Self {
            local_addr,
            shutdown_tx,
            handle,
        })
    }

    /// Bound address (useful when listening on port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting scrapes and wait for the task to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.await;
    }
}
