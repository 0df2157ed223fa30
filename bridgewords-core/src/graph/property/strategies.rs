//! Strategy builders for graph property-based tests.
//!
//! Labels come from a small fixed pool so generated sequences revisit the
//! same vertices often, producing overwrites, self-loops, cascades and
//! removals of absent vertices.

use proptest::prelude::*;

use crate::Weight;

use super::types::{Operation, OperationPlan, WeightBand};

/// Vertex labels available to generated operations.
pub(super) const LABELS: &[&str] = &["seek", "to", "explore", "strange", "new", "life"];

/// Upper bound on generated plan length.
const MAX_STEPS: usize = 48;

fn label_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(LABELS).prop_map(str::to_owned)
}

fn weight_strategy() -> impl Strategy<Value = Weight> {
    any::<WeightBand>().prop_flat_map(|band| match band {
        WeightBand::Negative => (-5..=-1).boxed(),
        WeightBand::Zero => Just(0).boxed(),
        WeightBand::Positive => (1..=9).boxed(),
    })
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        1 => label_strategy().prop_map(Operation::Add),
        5 => (label_strategy(), label_strategy(), weight_strategy()).prop_map(
            |(source, target, weight)| Operation::Set {
                source,
                target,
                weight,
            }
        ),
        1 => label_strategy().prop_map(Operation::Remove),
    ]
}

/// Generates operation plans of up to [`MAX_STEPS`] steps.
pub(super) fn operation_plan_strategy() -> impl Strategy<Value = OperationPlan> {
    prop::collection::vec(operation_strategy(), 0..MAX_STEPS)
        .prop_map(|operations| OperationPlan { operations })
}
