//! promapi core: transport-agnostic building blocks for the Prometheus
//! compatibility endpoints.
//!
//! This crate defines the response envelope, the buildinfo document, the
//! executable timestamp probe and the shared error surface. It carries no HTTP
//! or runtime dependencies so the gateway and tests can reuse it freely.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod buildinfo;
pub mod envelope;
pub mod error;
pub mod timestamp;

pub use buildinfo::{BuildinfoSettings, VersionInfo, RUNTIME_VERSION};
pub use envelope::ApiEnvelope;
/// Shared result type.
pub use error::{PromApiError, Result};
pub use timestamp::{resolve_build_timestamp, BinaryProbe, TIMESTAMP_FORMAT};
