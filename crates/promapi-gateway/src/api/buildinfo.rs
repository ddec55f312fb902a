//! Simulated Prometheus `/api/v1/status/buildinfo` endpoint.
//!
//! Grafana uses it to determine the Prometheus flavor, e.g. to check whether
//! the ruler API is enabled. The request itself is never inspected.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};

use promapi_core::{resolve_build_timestamp, BinaryProbe, BuildinfoSettings, VersionInfo};

use crate::api::response::ResponseWriter;
use crate::app_state::AppState;

pub const BUILDINFO_PATH: &str = "/api/v1/status/buildinfo";

/// Stateless between requests; clones share the same settings.
#[derive(Debug, Clone)]
pub struct BuildinfoHandler {
    settings: Arc<BuildinfoSettings>,
    probe: Arc<BinaryProbe>,
}

/// Handler reporting `gmp/<binary_name>-<binary_version>` as its revision and
/// the running executable's mtime as its build date.
pub fn make_buildinfo_handler(
    binary_name: impl Into<String>,
    binary_version: impl Into<String>,
) -> BuildinfoHandler {
    BuildinfoHandler::with_settings(
        BuildinfoSettings::new(binary_name, binary_version),
        BinaryProbe::current(),
    )
}

impl BuildinfoHandler {
    pub fn with_settings(settings: BuildinfoSettings, probe: BinaryProbe) -> Self {
        Self {
            settings: Arc::new(settings),
            probe: Arc::new(probe),
        }
    }

    pub fn settings(&self) -> &BuildinfoSettings {
        &self.settings
    }

    /// Built fresh on every call so a replaced executable is picked up.
    pub fn version_info(&self) -> VersionInfo {
        self.settings
            .version_info(resolve_build_timestamp(&self.probe))
    }

    pub fn respond(&self, writer: &ResponseWriter) -> Response {
        writer.success(StatusCode::OK, BUILDINFO_PATH, self.version_info())
    }
}

pub async fn buildinfo(State(state): State<AppState>) -> Response {
    state.buildinfo().respond(state.writer())
}
