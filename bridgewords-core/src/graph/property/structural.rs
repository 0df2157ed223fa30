//! Property 2: structural invariants.
//!
//! After every step, for every representation: stored weights are positive,
//! edge endpoints are known vertices, and `sources` mirrors `targets`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, GraphKind};

use super::oracle::apply_to_graph;
use super::types::OperationPlan;

/// Runs the structural invariant property against one representation.
pub(super) fn run_structural_invariants_property(
    kind: GraphKind,
    plan: &OperationPlan,
) -> TestCaseResult {
    let mut graph = kind.empty::<String>();

    for (step, operation) in plan.operations.iter().enumerate() {
        apply_to_graph(graph.as_mut(), operation);
        check_invariants(kind, graph.as_ref(), step)?;
    }

    Ok(())
}

fn check_invariants(kind: GraphKind, graph: &dyn Graph<String>, step: usize) -> TestCaseResult {
    let vertices = graph.vertices();

    for source in &vertices {
        for (target, weight) in graph.targets(source) {
            if weight <= 0 {
                return Err(TestCaseError::fail(format!(
                    "{kind}: non-positive weight {weight} on {source} -> {target} at step {step}",
                )));
            }
            if !vertices.contains(&target) {
                return Err(TestCaseError::fail(format!(
                    "{kind}: dangling edge {source} -> {target} at step {step}",
                )));
            }
            let mirrored = graph.sources(&target).get(source).copied();
            if mirrored != Some(weight) {
                return Err(TestCaseError::fail(format!(
                    "{kind}: sources({target})[{source}] = {mirrored:?}, targets gave {weight} at step {step}",
                )));
            }
        }
    }

    Ok(())
}
