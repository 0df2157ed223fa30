//! Shared test utilities used across bridgewords crates.

pub mod ci;
pub mod tracing;
