//! Type definitions for graph property-based tests.

use test_strategy::Arbitrary;

use crate::Weight;

/// Band a generated edge weight is drawn from.
///
/// Positive weights dominate so generated graphs stay populated, while zero
/// and negative weights still appear often enough to exercise deletion and
/// rejection paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightBand {
    /// A weight below zero, which `set` must reject.
    #[weight(1)]
    Negative,
    /// Exactly zero, the deletion sentinel.
    #[weight(2)]
    Zero,
    /// A storable weight.
    #[weight(5)]
    Positive,
}

/// A single mutating call against the graph contract.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Operation {
    /// `add(label)`.
    Add(String),
    /// `set(source, target, weight)`.
    Set {
        /// Edge source label.
        source: String,
        /// Edge target label.
        target: String,
        /// Requested weight, possibly negative.
        weight: Weight,
    },
    /// `remove(label)`.
    Remove(String),
}

/// The value an [`Operation`] returned, normalised for comparison.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Outcome {
    /// Result of `add`.
    Added(bool),
    /// Result of `set`: the previous weight or the rejected weight.
    Set(Result<Weight, Weight>),
    /// Result of `remove`.
    Removed(bool),
}

/// Sequence of operations replayed by a property.
#[derive(Clone, Debug)]
pub(super) struct OperationPlan {
    /// Operations in application order.
    pub operations: Vec<Operation>,
}
