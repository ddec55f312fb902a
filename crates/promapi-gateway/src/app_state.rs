//! Shared application state for the promapi gateway.

use std::sync::Arc;

use promapi_core::error::Result;

use crate::api::{BuildinfoHandler, ResponseWriter};
use crate::config::GatewayConfig;
use crate::obs::metrics::ApiMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    buildinfo: BuildinfoHandler,
    writer: ResponseWriter,
    metrics: Arc<ApiMetrics>,
}

impl AppState {
    /// Build application state from a loaded config.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;

        let buildinfo =
            BuildinfoHandler::with_settings(cfg.buildinfo.settings(), cfg.buildinfo.probe());
        let metrics = Arc::new(ApiMetrics::default());
        let writer = ResponseWriter::new(Arc::clone(&metrics));

        tracing::info!(
            binary = %buildinfo.settings().binary_name,
            revision = %buildinfo.settings().revision(),
            "buildinfo configured"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                buildinfo,
                writer,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn buildinfo(&self) -> &BuildinfoHandler {
        &self.inner.buildinfo
    }

    pub fn writer(&self) -> &ResponseWriter {
        &self.inner.writer
    }

    pub fn metrics(&self) -> &ApiMetrics {
        &self.inner.metrics
    }
}
