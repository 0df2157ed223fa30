//! Immutable edge value used by [`super::EdgeListGraph`].

use std::fmt;

use super::Weight;

/// A directed, weighted connection between two vertex labels.
///
/// Edges are values: changing a weight means building a replacement edge.
///
/// # Examples
/// ```
/// use bridgewords_core::{EdgeListGraph, Graph};
///
/// let mut graph = EdgeListGraph::new();
/// graph.set("seek", "to", 1)?;
/// let edge = &graph.edges()[0];
/// assert_eq!(edge.source(), &"seek");
/// assert_eq!(edge.target(), &"to");
/// assert_eq!(edge.weight(), 1);
/// assert_eq!(edge.to_string(), "seek -> to (1)");
/// # Ok::<(), bridgewords_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge<L> {
    source: L,
    target: L,
    weight: Weight,
}

impl<L> Edge<L> {
    pub(crate) fn new(source: L, target: L, weight: Weight) -> Self {
        debug_assert!(weight > 0, "stored edges must carry a positive weight");
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the label the edge leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &L { &self.source }

    /// Returns the label the edge enters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &L { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl<L: PartialEq> Edge<L> {
    /// Returns whether the edge runs from `source` to `target`.
    #[must_use]
    pub fn connects(&self, source: &L, target: &L) -> bool {
        self.source == *source && self.target == *target
    }

    /// Returns whether `vertex` is either endpoint.
    #[must_use]
    pub fn touches(&self, vertex: &L) -> bool {
        self.source == *vertex || self.target == *vertex
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
