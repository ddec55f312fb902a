use std::net::SocketAddr;

use promapi_core::buildinfo::{
    BuildinfoSettings, DEFAULT_BRANCH, DEFAULT_BUILD_USER, DEFAULT_PROMETHEUS_VERSION,
    DEFAULT_REVISION_PREFIX,
};
use promapi_core::error::{PromApiError, Result};
use promapi_core::BinaryProbe;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub buildinfo: BuildinfoSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PromApiError::BadData(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.buildinfo.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PromApiError::BadData(format!(
                "gateway.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:9090".into()
}

/// Values reported by `/api/v1/status/buildinfo`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildinfoSection {
    #[serde(default = "default_binary_name")]
    pub binary_name: String,

    #[serde(default = "default_binary_version")]
    pub binary_version: String,

    #[serde(default = "default_prometheus_version")]
    pub prometheus_version: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_build_user")]
    pub build_user: String,

    #[serde(default = "default_revision_prefix")]
    pub revision_prefix: String,

    /// Overrides `argv[0]` as the file whose mtime becomes `buildDate`.
    #[serde(default)]
    pub binary_path: Option<String>,
}

impl Default for BuildinfoSection {
    fn default() -> Self {
        Self {
            binary_name: default_binary_name(),
            binary_version: default_binary_version(),
            prometheus_version: default_prometheus_version(),
            branch: default_branch(),
            build_user: default_build_user(),
            revision_prefix: default_revision_prefix(),
            binary_path: None,
        }
    }
}

impl BuildinfoSection {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("binary_name", &self.binary_name),
            ("binary_version", &self.binary_version),
            ("prometheus_version", &self.prometheus_version),
            ("branch", &self.branch),
            ("build_user", &self.build_user),
            ("revision_prefix", &self.revision_prefix),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(PromApiError::BadData(format!(
                    "buildinfo.{name} must not be empty"
                )));
            }
        }
        if matches!(&self.binary_path, Some(p) if p.trim().is_empty()) {
            return Err(PromApiError::BadData(
                "buildinfo.binary_path must not be empty when set".into(),
            ));
        }
        Ok(())
    }

    pub fn settings(&self) -> BuildinfoSettings {
        BuildinfoSettings {
            binary_name: self.binary_name.clone(),
            binary_version: self.binary_version.clone(),
            prometheus_version: self.prometheus_version.clone(),
            branch: self.branch.clone(),
            build_user: self.build_user.clone(),
            revision_prefix: self.revision_prefix.clone(),
        }
    }

    pub fn probe(&self) -> BinaryProbe {
        match &self.binary_path {
            Some(path) => BinaryProbe::at(path),
            None => BinaryProbe::current(),
        }
    }
}

fn default_binary_name() -> String {
    env!("CARGO_PKG_NAME").into()
}
fn default_binary_version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
fn default_prometheus_version() -> String {
    DEFAULT_PROMETHEUS_VERSION.into()
}
fn default_branch() -> String {
    DEFAULT_BRANCH.into()
}
fn default_build_user() -> String {
    DEFAULT_BUILD_USER.into()
}
fn default_revision_prefix() -> String {
    DEFAULT_REVISION_PREFIX.into()
}
