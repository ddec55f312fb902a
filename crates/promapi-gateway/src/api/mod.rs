//! Prometheus HTTP API compatibility handlers.
//!
//! - `/api/v1/status/buildinfo` : emulated build information
//! - anything else              : `not_found` error envelope

pub mod buildinfo;
pub mod response;

pub use buildinfo::{make_buildinfo_handler, BuildinfoHandler, BUILDINFO_PATH};
pub use response::ResponseWriter;
