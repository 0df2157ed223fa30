//! Bridgewords core library.
//!
//! Provides a mutable, directed, weighted graph ADT with two interchangeable
//! representations. Both satisfy the [`Graph`] contract and are
//! observationally identical; [`GraphKind`] picks one at runtime.

mod error;
mod graph;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{AdjacencyGraph, Edge, EdgeListGraph, Graph, GraphKind, Weight},
};
