//! Buildinfo document served at `/api/v1/status/buildinfo`.
//!
//! Grafana reads this endpoint to detect the Prometheus flavor, e.g. whether
//! the ruler API is available. The field names are fixed by Prometheus'
//! `PrometheusVersion` JSON shape.

use serde::Serialize;

/// Compiler version captured by `build.rs`; reported as `goVersion`.
pub const RUNTIME_VERSION: &str = env!("PROMAPI_RUSTC_VERSION");

/// Version of the Prometheus API being emulated.
pub const DEFAULT_PROMETHEUS_VERSION: &str = "1.8.2";
pub const DEFAULT_BRANCH: &str = "HEAD";
pub const DEFAULT_BUILD_USER: &str = "gmp@localhost";
pub const DEFAULT_REVISION_PREFIX: &str = "gmp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub revision: String,
    pub branch: String,
    pub build_user: String,
    pub build_date: String,
    pub go_version: String,
}

/// Identity and emulated-dependency values for the buildinfo document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildinfoSettings {
    /// e.g. "frontend" or "rule-evaluator".
    pub binary_name: String,
    pub binary_version: String,
    pub prometheus_version: String,
    pub branch: String,
    pub build_user: String,
    pub revision_prefix: String,
}

impl BuildinfoSettings {
    pub fn new(binary_name: impl Into<String>, binary_version: impl Into<String>) -> Self {
        Self {
            binary_name: binary_name.into(),
            binary_version: binary_version.into(),
            prometheus_version: DEFAULT_PROMETHEUS_VERSION.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            build_user: DEFAULT_BUILD_USER.to_string(),
            revision_prefix: DEFAULT_REVISION_PREFIX.to_string(),
        }
    }

    /// `<prefix>/<binary_name>-<binary_version>`
    pub fn revision(&self) -> String {
        format!(
            "{}/{}-{}",
            self.revision_prefix, self.binary_name, self.binary_version
        )
    }

    pub fn version_info(&self, build_date: String) -> VersionInfo {
        VersionInfo {
            version: self.prometheus_version.clone(),
            revision: self.revision(),
            branch: self.branch.clone(),
            build_user: self.build_user.clone(),
            build_date,
            go_version: RUNTIME_VERSION.to_string(),
        }
    }
}
