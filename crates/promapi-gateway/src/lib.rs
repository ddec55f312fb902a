//! promapi gateway library entry.
//!
//! Hosts the Prometheus compatibility handlers on an axum router together
//! with config loading and operational endpoints. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
