//! Property-based tests for the graph representations.
//!
//! Replays generated operation sequences against both representations and a
//! sequential `BTreeMap` oracle, comparing every query after every step, and
//! validates the structural invariants shared by all representations.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
