//! Property 1: representation equivalence.
//!
//! Every operation in the plan is applied to an [`EdgeListGraph`], an
//! [`AdjacencyGraph`] and the oracle. Return values must agree, and after each
//! step every query over every label must agree as well.

use std::collections::{BTreeMap, BTreeSet};

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{AdjacencyGraph, EdgeListGraph, Graph, Weight};

use super::oracle::{OracleGraph, apply_to_graph};
use super::strategies::LABELS;
use super::types::OperationPlan;

/// Runs the equivalence property for the given plan.
pub(super) fn run_equivalence_property(plan: &OperationPlan) -> TestCaseResult {
    let mut edge_list: EdgeListGraph<String> = EdgeListGraph::new();
    let mut adjacency: AdjacencyGraph<String> = AdjacencyGraph::new();
    let mut oracle = OracleGraph::default();

    for (step, operation) in plan.operations.iter().enumerate() {
        let expected = oracle.apply(operation);
        let from_edge_list = apply_to_graph(&mut edge_list, operation);
        let from_adjacency = apply_to_graph(&mut adjacency, operation);

        if from_edge_list != expected || from_adjacency != expected {
            return Err(TestCaseError::fail(format!(
                "return value mismatch at step {step} ({operation:?}): \
                 oracle={expected:?}, edge_list={from_edge_list:?}, adjacency={from_adjacency:?}",
            )));
        }

        compare_snapshots("edge_list", &edge_list, &oracle, step)?;
        compare_snapshots("adjacency", &adjacency, &oracle, step)?;
    }

    Ok(())
}

fn compare_snapshots(
    name: &str,
    graph: &dyn Graph<String>,
    oracle: &OracleGraph,
    step: usize,
) -> TestCaseResult {
    let vertices: BTreeSet<String> = graph.vertices().into_iter().collect();
    if vertices != oracle.vertices() {
        return Err(TestCaseError::fail(format!(
            "{name}: vertex mismatch after step {step}: got {vertices:?}, expected {:?}",
            oracle.vertices(),
        )));
    }

    if graph.vertex_count() != vertices.len() || graph.edge_count() != oracle.edge_count() {
        return Err(TestCaseError::fail(format!(
            "{name}: count mismatch after step {step}: vertices={}, edges={} (expected {}, {})",
            graph.vertex_count(),
            graph.edge_count(),
            vertices.len(),
            oracle.edge_count(),
        )));
    }

    for label in LABELS {
        let key = (*label).to_owned();
        let sources = ordered(graph.sources(&key));
        let targets = ordered(graph.targets(&key));
        if sources != oracle.sources(label) || targets != oracle.targets(label) {
            return Err(TestCaseError::fail(format!(
                "{name}: adjacency mismatch for `{label}` after step {step}: \
                 sources={sources:?} targets={targets:?}",
            )));
        }
        if graph.contains(&key) != vertices.contains(&key) {
            return Err(TestCaseError::fail(format!(
                "{name}: contains(`{label}`) disagrees with vertices() after step {step}",
            )));
        }
        for other in LABELS {
            let other_key = (*other).to_owned();
            let expected = oracle.targets(label).get(*other).copied().unwrap_or(0);
            let actual = graph.weight(&key, &other_key);
            if actual != expected {
                return Err(TestCaseError::fail(format!(
                    "{name}: weight({label}, {other}) = {actual}, expected {expected} after step {step}",
                )));
            }
        }
    }

    Ok(())
}

fn ordered(map: std::collections::HashMap<String, Weight>) -> BTreeMap<String, Weight> {
    map.into_iter().collect()
}
