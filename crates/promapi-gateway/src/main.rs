//! promapi gateway
//!
//! Serves `/api/v1/status/buildinfo` so Prometheus clients can detect the
//! server flavor. Config path comes from `PROMAPI_CONFIG` (default
//! `promapi.yaml`), log filter from `RUST_LOG`.

use tracing_subscriber::{fmt, EnvFilter};

use promapi_core::error::Result;
use promapi_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("PROMAPI_CONFIG")
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "promapi-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
