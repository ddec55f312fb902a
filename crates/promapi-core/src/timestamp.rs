//! Build timestamp resolution.
//!
//! The binary carries no embedded build date, so the modification time of the
//! running executable stands in for it. When that cannot be read the current
//! wall-clock time is used instead. Times are rendered in the local zone with
//! no normalisation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::{PromApiError, Result};

/// `YYYYMMDD-HH:MM:SS`, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S";

/// Locates the file whose modification time is reported as the build date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryProbe {
    path: Option<PathBuf>,
}

impl BinaryProbe {
    /// Probe the running executable through its invocation path (`argv[0]`).
    pub fn current() -> Self {
        let path = std::env::args_os()
            .next()
            .filter(|arg| !arg.is_empty())
            .map(PathBuf::from);
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn modified(&self) -> Result<SystemTime> {
        let path = self.path().ok_or(PromApiError::NoInvocationPath)?;
        let meta = std::fs::metadata(path)?;
        Ok(meta.modified()?)
    }
}

impl Default for BinaryProbe {
    fn default() -> Self {
        Self::current()
    }
}

pub fn format_timestamp(t: impl Into<DateTime<Local>>) -> String {
    t.into().format(TIMESTAMP_FORMAT).to_string()
}

/// Never fails: a probe error is logged once and the current time is used.
pub fn resolve_build_timestamp(probe: &BinaryProbe) -> String {
    match probe.modified() {
        Ok(modified) => format_timestamp(modified),
        Err(err) => {
            tracing::error!(
                error = %err,
                path = ?probe.path(),
                "failed to get binary creation timestamp, using now()"
            );
            format_timestamp(Local::now())
        }
    }
}
