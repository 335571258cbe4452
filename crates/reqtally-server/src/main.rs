//! reqtally server entry point.
//!
//! Boot order matters: the metrics exposition listener comes up first, and
//! any failure there is fatal — the primary server never starts without a
//! working scrape endpoint.

use tracing_subscriber::{fmt, EnvFilter};

use reqtally_core::error::{ReqTallyError, Result};
use reqtally_server::{app_state::AppState, config, exposition::Exposition, router};

const CONFIG_PATH: &str = "reqtally.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(CONFIG_PATH)?;
    let server_addr = cfg.server.listen_addr()?;
    let telemetry_addr = cfg.telemetry.listen_addr()?;

    let state = AppState::new(cfg);

    let exposition = Exposition::start(telemetry_addr, state.clone()).await?;

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .map_err(|e| ReqTallyError::Init(format!("bind server listener {server_addr}: {e}")))?;

    tracing::info!(%server_addr, "reqtally server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await
        .map_err(|e| ReqTallyError::Internal(format!("server failed: {e}")))?;

    exposition.shutdown().await;

    Ok(())
}
