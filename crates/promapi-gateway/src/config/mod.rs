//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use promapi_core::error::{PromApiError, Result};

pub use schema::{BuildinfoSection, GatewayConfig, GatewaySection};

/// Used when `PROMAPI_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "promapi.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PromApiError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| PromApiError::BadData(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
