//! Benchmark parameter labels.

use std::fmt;

use bridgewords_core::GraphKind;

/// Parameters identifying one corpus benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct CorpusBenchParams {
    /// Representation under test.
    pub kind: GraphKind,
    /// Number of distinct words the corpus draws from.
    pub vocabulary_size: usize,
    /// Total number of corpus words.
    pub word_count: usize,
}

impl fmt::Display for CorpusBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},vocab={},words={}",
            self.kind, self.vocabulary_size, self.word_count
        )
    }
}
