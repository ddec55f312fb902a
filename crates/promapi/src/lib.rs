//! Top-level facade crate for promapi.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use promapi_core::*;
}

pub mod gateway {
    pub use promapi_gateway::*;
}
