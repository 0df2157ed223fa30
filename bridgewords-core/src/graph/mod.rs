//! Mutable, directed, weighted graph ADT.
//!
//! [`Graph`] is the contract; [`EdgeListGraph`] and [`AdjacencyGraph`] are two
//! storage strategies satisfying it. Every sequence of operations produces the
//! same observable results on both, so callers pick a representation with
//! [`GraphKind`] and program against `dyn Graph<L>`.
//!
//! Queries return owned snapshots. Mutating the graph afterwards never changes
//! a map or set the caller already holds.
//!
//! The ADT is single-threaded. Read-modify-write sequences such as
//! incrementing an edge (`weight` then `set`) are only safe while one caller
//! owns the graph exclusively.

mod adjacency;
mod edge;
mod edge_list;

#[cfg(test)]
mod property;

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use crate::error::Result;

pub use self::{adjacency::AdjacencyGraph, edge::Edge, edge_list::EdgeListGraph};

/// Integer edge weight. Stored edges always carry a weight above zero.
pub type Weight = i32;

/// A mutable directed graph with one positive weight per ordered vertex pair.
///
/// # Examples
/// ```
/// use bridgewords_core::{Graph, GraphKind};
///
/// let mut graph = GraphKind::Adjacency.empty::<&str>();
/// assert_eq!(graph.set("to", "explore", 2)?, 0);
/// assert_eq!(graph.targets(&"to").get("explore"), Some(&2));
/// assert_eq!(graph.sources(&"explore").get("to"), Some(&2));
/// assert!(graph.remove(&"to"));
/// assert!(graph.sources(&"explore").is_empty());
/// # Ok::<(), bridgewords_core::GraphError>(())
/// ```
pub trait Graph<L>
where
    L: Clone + Eq + Hash,
{
    /// Adds a vertex with no edges.
    ///
    /// Returns `false` without touching the graph when the label is already
    /// present.
    fn add(&mut self, vertex: L) -> bool;

    /// Creates, updates or deletes the edge `source -> target`.
    ///
    /// A positive weight creates or overwrites the edge, adding either vertex
    /// if it is missing. A zero weight deletes the edge when it exists and is
    /// otherwise a no-op. The previous weight is returned, `0` when no edge
    /// existed.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NegativeWeight`] when `weight < 0`; the
    /// graph is left unchanged.
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// Removes a vertex together with every edge entering or leaving it.
    ///
    /// Returns `false` when the vertex is absent.
    fn remove(&mut self, vertex: &L) -> bool;

    /// Returns a snapshot of the vertex labels.
    fn vertices(&self) -> HashSet<L>;

    /// Returns every vertex with an edge into `target`, keyed by label.
    ///
    /// Unknown targets yield an empty map.
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// Returns every vertex `source` has an edge to, keyed by label.
    ///
    /// Unknown sources yield an empty map.
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// Returns the weight of `source -> target`, or `0` when no edge exists.
    fn weight(&self, source: &L, target: &L) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// Returns whether `vertex` is present.
    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the number of stored edges.
    fn edge_count(&self) -> usize {
        self.vertices()
            .iter()
            .map(|vertex| self.targets(vertex).len())
            .sum()
    }
}

/// Selects the storage strategy backing a graph.
///
/// # Examples
/// ```
/// use bridgewords_core::GraphKind;
///
/// let mut graph = GraphKind::EdgeList.empty::<String>();
/// assert!(graph.add("alpha".to_owned()));
/// assert_eq!(GraphKind::default(), GraphKind::Adjacency);
/// assert_eq!(GraphKind::EdgeList.to_string(), "edge-list");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GraphKind {
    /// Vertex set plus a flat list of edges; see [`EdgeListGraph`].
    EdgeList,
    /// One record per vertex owning its outgoing edges; see [`AdjacencyGraph`].
    #[default]
    Adjacency,
}

impl GraphKind {
    /// Every supported representation, in declaration order.
    pub const ALL: [Self; 2] = [Self::EdgeList, Self::Adjacency];

    /// Builds an empty graph using this representation.
    #[must_use]
    pub fn empty<L>(self) -> Box<dyn Graph<L>>
    where
        L: Clone + Eq + Hash + 'static,
    {
        match self {
            Self::EdgeList => Box::new(EdgeListGraph::new()),
            Self::Adjacency => Box::new(AdjacencyGraph::new()),
        }
    }

    /// Returns the kebab-case name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeList => "edge-list",
            Self::Adjacency => "adjacency",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
