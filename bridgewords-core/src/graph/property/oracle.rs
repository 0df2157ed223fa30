//! Sequential reference model of the graph contract.
//!
//! Written directly from the contract with ordered collections so failures
//! print deterministically. Both representations are compared against it.

use std::collections::{BTreeMap, BTreeSet};

use crate::{Graph, Weight};

use super::types::{Operation, Outcome};

/// Ordered model of a weighted directed graph.
#[derive(Clone, Debug, Default)]
pub(super) struct OracleGraph {
    vertices: BTreeSet<String>,
    edges: BTreeMap<(String, String), Weight>,
}

impl OracleGraph {
    pub(super) fn apply(&mut self, operation: &Operation) -> Outcome {
        match operation {
            Operation::Add(label) => Outcome::Added(self.vertices.insert(label.clone())),
            Operation::Set {
                source,
                target,
                weight,
            } => Outcome::Set(self.set(source, target, *weight)),
            Operation::Remove(label) => Outcome::Removed(self.remove(label)),
        }
    }

    fn set(&mut self, source: &str, target: &str, weight: Weight) -> Result<Weight, Weight> {
        if weight < 0 {
            return Err(weight);
        }
        let key = (source.to_owned(), target.to_owned());
        if weight == 0 {
            return Ok(self.edges.remove(&key).unwrap_or(0));
        }
        self.vertices.insert(source.to_owned());
        self.vertices.insert(target.to_owned());
        Ok(self.edges.insert(key, weight).unwrap_or(0))
    }

    fn remove(&mut self, label: &str) -> bool {
        if !self.vertices.remove(label) {
            return false;
        }
        self.edges
            .retain(|(source, target), _| source != label && target != label);
        true
    }

    pub(super) fn vertices(&self) -> BTreeSet<String> {
        self.vertices.clone()
    }

    pub(super) fn sources(&self, target: &str) -> BTreeMap<String, Weight> {
        self.edges
            .iter()
            .filter(|((_, to), _)| to == target)
            .map(|((from, _), weight)| (from.clone(), *weight))
            .collect()
    }

    pub(super) fn targets(&self, source: &str) -> BTreeMap<String, Weight> {
        self.edges
            .iter()
            .filter(|((from, _), _)| from == source)
            .map(|((_, to), weight)| (to.clone(), *weight))
            .collect()
    }

    pub(super) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Applies `operation` to a graph under test, normalising the return value.
pub(super) fn apply_to_graph(graph: &mut dyn Graph<String>, operation: &Operation) -> Outcome {
    match operation {
        Operation::Add(label) => Outcome::Added(graph.add(label.clone())),
        Operation::Set {
            source,
            target,
            weight,
        } => Outcome::Set(
            graph
                .set(source.clone(), target.clone(), *weight)
                .map_err(|err| err.weight()),
        ),
        Operation::Remove(label) => Outcome::Removed(graph.remove(label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_zero_weight_without_edge_is_inert() {
        let mut oracle = OracleGraph::default();
        let outcome = oracle.apply(&Operation::Set {
            source: "a".into(),
            target: "b".into(),
            weight: 0,
        });
        assert_eq!(outcome, Outcome::Set(Ok(0)));
        assert!(oracle.vertices().is_empty());
    }

    #[test]
    fn oracle_remove_cascades() {
        let mut oracle = OracleGraph::default();
        for (source, target) in [("a", "b"), ("b", "c")] {
            oracle.apply(&Operation::Set {
                source: source.into(),
                target: target.into(),
                weight: 1,
            });
        }
        assert_eq!(oracle.apply(&Operation::Remove("b".into())), Outcome::Removed(true));
        assert!(oracle.targets("a").is_empty());
        assert!(oracle.sources("c").is_empty());
        assert_eq!(oracle.edge_count(), 0);
    }
}
