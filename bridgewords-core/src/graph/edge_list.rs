//! Graph representation backed by a vertex set and a flat edge list.
//!
//! Vertex membership is a hash lookup; every edge query scans the whole list.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
    mem,
};

use tracing::debug;

use super::{Edge, Graph, Weight};
use crate::error::{Result, check_weight};

/// A [`Graph`] storing vertices in a set and edges as a list of [`Edge`]
/// values.
///
/// Invariants: every stored edge has a positive weight, both of its endpoints
/// are in the vertex set, and no two edges share the same ordered endpoints.
///
/// # Examples
/// ```
/// use bridgewords_core::{EdgeListGraph, Graph};
///
/// let mut graph = EdgeListGraph::new();
/// graph.set("a", "b", 4)?;
/// graph.set("b", "c", 1)?;
/// assert_eq!(graph.edges().len(), 2);
/// assert_eq!(graph.set("a", "b", 0)?, 4);
/// assert_eq!(graph.edges().len(), 1);
/// # Ok::<(), bridgewords_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeListGraph<L> {
    vertices: HashSet<L>,
    edges: Vec<Edge<L>>,
}

impl<L> Default for EdgeListGraph<L> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<L> EdgeListGraph<L>
where
    L: Clone + Eq + Hash,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<L>] {
        &self.edges
    }

    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|edge| edge.connects(source, target))
    }

    fn check_rep(&self) {
        #[cfg(debug_assertions)]
        {
            let mut pairs = HashSet::with_capacity(self.edges.len());
            for edge in &self.edges {
                debug_assert!(edge.weight() > 0, "stored weight must be positive");
                debug_assert!(
                    self.vertices.contains(edge.source()) && self.vertices.contains(edge.target()),
                    "edge endpoints must be known vertices"
                );
                debug_assert!(
                    pairs.insert((edge.source(), edge.target())),
                    "ordered vertex pairs must be unique"
                );
            }
        }
    }
}

impl<L> Graph<L> for EdgeListGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn add(&mut self, vertex: L) -> bool {
        self.vertices.insert(vertex)
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;
        let existing = self.position(&source, &target);

        let previous = match existing {
            Some(index) if weight == 0 => self.edges.remove(index).weight(),
            None if weight == 0 => 0,
            Some(index) => {
                let replacement = Edge::new(source, target, weight);
                self.edges
                    .get_mut(index)
                    .map_or(0, |slot| mem::replace(slot, replacement).weight())
            }
            None => {
                self.vertices.insert(source.clone());
                self.vertices.insert(target.clone());
                self.edges.push(Edge::new(source, target, weight));
                0
            }
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(vertex));
        debug!(
            removed_edges = before - self.edges.len(),
            remaining_vertices = self.vertices.len(),
            "vertex removed from edge-list graph"
        );
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|edge| edge.target() == target)
            .map(|edge| (edge.source().clone(), edge.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|edge| edge.source() == source)
            .map(|edge| (edge.target().clone(), edge.weight()))
            .collect()
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.position(source, target)
            .and_then(|index| self.edges.get(index))
            .map_or(0, Edge::weight)
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<L: fmt::Display> fmt::Display for EdgeListGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertices: {")?;
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("}\nEdges:\n")?;
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
