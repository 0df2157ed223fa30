//! Graph representation where each vertex record owns its outgoing edges.
//!
//! Vertex records live in an ordered list, so locating a vertex is a linear
//! scan. Once found, a vertex answers questions about its own outgoing edges
//! through a hash map. No reverse index is kept, which makes incoming-edge
//! queries visit every vertex.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use tracing::debug;

use super::{Graph, Weight};
use crate::error::{Result, check_weight};

/// A vertex label together with the weights of its outgoing edges.
#[derive(Clone, Debug)]
struct Vertex<L> {
    label: L,
    targets: HashMap<L, Weight>,
}

impl<L> Vertex<L>
where
    L: Clone + Eq + Hash,
{
    fn new(label: L) -> Self {
        Self {
            label,
            targets: HashMap::new(),
        }
    }

    /// Stores a positive weight or deletes the edge for zero, returning the
    /// previous weight.
    fn set_target(&mut self, target: L, weight: Weight) -> Weight {
        let previous = if weight == 0 {
            self.targets.remove(&target)
        } else {
            self.targets.insert(target, weight)
        };
        previous.unwrap_or(0)
    }

    fn remove_target(&mut self, target: &L) -> Option<Weight> {
        self.targets.remove(target)
    }

    fn weight_to(&self, target: &L) -> Option<Weight> {
        self.targets.get(target).copied()
    }
}

/// A [`Graph`] storing one record per vertex, each owning a map of outgoing
/// edge weights.
///
/// Invariants: labels are unique across records, every weight in a record is
/// positive, and every target named in a record has its own record.
///
/// # Examples
/// ```
/// use bridgewords_core::{AdjacencyGraph, Graph};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.set("new", "life", 1)?;
/// graph.set("new", "civilizations", 1)?;
/// assert_eq!(graph.targets(&"new").len(), 2);
/// assert_eq!(graph.sources(&"life").get("new"), Some(&1));
/// # Ok::<(), bridgewords_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<L> {
    vertices: Vec<Vertex<L>>,
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<L> AdjacencyGraph<L>
where
    L: Clone + Eq + Hash,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.iter().find(|vertex| vertex.label == *label)
    }

    fn find_mut(&mut self, label: &L) -> Option<&mut Vertex<L>> {
        self.vertices
            .iter_mut()
            .find(|vertex| vertex.label == *label)
    }

    fn check_rep(&self) {
        #[cfg(debug_assertions)]
        {
            let labels: HashSet<&L> = self.vertices.iter().map(|vertex| &vertex.label).collect();
            debug_assert_eq!(
                labels.len(),
                self.vertices.len(),
                "vertex labels must be unique"
            );
            for vertex in &self.vertices {
                for (target, weight) in &vertex.targets {
                    debug_assert!(*weight > 0, "stored weight must be positive");
                    debug_assert!(labels.contains(target), "edge target must be a vertex");
                }
            }
        }
    }
}

impl<L> Graph<L> for AdjacencyGraph<L>
where
    L: Clone + Eq + Hash,
{
    fn add(&mut self, vertex: L) -> bool {
        if self.find(&vertex).is_some() {
            return false;
        }
        self.vertices.push(Vertex::new(vertex));
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let previous = if weight == 0 {
            self.find_mut(&source)
                .and_then(|vertex| vertex.remove_target(&target))
                .unwrap_or(0)
        } else {
            self.add(source.clone());
            self.add(target.clone());
            self.find_mut(&source)
                .map_or(0, |vertex| vertex.set_target(target, weight))
        };

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(index) = self
            .vertices
            .iter()
            .position(|record| record.label == *vertex)
        else {
            return false;
        };

        let removed = self.vertices.remove(index);
        let incoming = self
            .vertices
            .iter_mut()
            .filter_map(|record| record.remove_target(vertex))
            .count();
        debug!(
            removed_edges = removed.targets.len() + incoming,
            remaining_vertices = self.vertices.len(),
            "vertex removed from adjacency graph"
        );
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices
            .iter()
            .map(|vertex| vertex.label.clone())
            .collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.vertices
            .iter()
            .filter_map(|vertex| {
                vertex
                    .weight_to(target)
                    .map(|weight| (vertex.label.clone(), weight))
            })
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.find(source)
            .map(|vertex| vertex.targets.clone())
            .unwrap_or_default()
    }

    fn weight(&self, source: &L, target: &L) -> Weight {
        self.find(source)
            .and_then(|vertex| vertex.weight_to(target))
            .unwrap_or(0)
    }

    fn contains(&self, vertex: &L) -> bool {
        self.find(vertex).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.targets.len()).sum()
    }
}

impl<L: fmt::Display> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Graph:\n")?;
        for vertex in &self.vertices {
            write!(f, "{} -> {{", vertex.label)?;
            for (index, (target, weight)) in vertex.targets.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{target}={weight}")?;
            }
            f.write_str("}\n")?;
        }
        Ok(())
    }
}
