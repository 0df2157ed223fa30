//! Benchmark support crate for bridgewords.
//!
//! Generates reproducible synthetic corpora and parameter labels used by the
//! Criterion benchmarks comparing the two graph representations.

pub mod corpus;
pub mod error;
pub mod params;
