//! Seeded synthetic corpora.
//!
//! Words are drawn from a fixed vocabulary with a skew towards low indices so
//! some adjacent pairs repeat often, which gives bridge selection real
//! competition between candidates.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for synthetic corpus generation.
#[derive(Clone, Debug)]
pub struct SyntheticCorpusConfig {
    /// Number of distinct words.
    pub vocabulary_size: usize,
    /// Number of lines to generate.
    pub line_count: usize,
    /// Number of words on each line.
    pub words_per_line: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

/// A generated corpus together with its vocabulary.
#[derive(Clone, Debug)]
pub struct SyntheticCorpus {
    vocabulary: Vec<String>,
    lines: Vec<String>,
}

impl SyntheticCorpus {
    /// Generates a corpus from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when the vocabulary, line count
    /// or words per line is zero.
    pub fn generate(config: &SyntheticCorpusConfig) -> Result<Self, BenchSetupError> {
        require_non_zero(config.vocabulary_size, "vocabulary_size")?;
        require_non_zero(config.line_count, "line_count")?;
        require_non_zero(config.words_per_line, "words_per_line")?;

        let vocabulary: Vec<String> = (0..config.vocabulary_size).map(vocabulary_word).collect();
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let lines = (0..config.line_count)
            .map(|_| {
                (0..config.words_per_line)
                    .filter_map(|_| vocabulary.get(skewed_index(&mut rng, vocabulary.len())))
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        Ok(Self { vocabulary, lines })
    }

    /// Returns the generated lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the distinct words the corpus draws from.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Builds a sentence of `length` vocabulary words for poem benchmarks.
    #[must_use]
    pub fn sample_sentence(&self, length: usize, seed: u64) -> String {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..length)
            .filter_map(|_| {
                self.vocabulary
                    .get(rng.gen_range(0..self.vocabulary.len()))
            })
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn require_non_zero(value: usize, context: &'static str) -> Result<(), BenchSetupError> {
    if value == 0 {
        return Err(BenchSetupError::ZeroValue { context });
    }
    Ok(())
}

fn vocabulary_word(index: usize) -> String {
    format!("w{index}")
}

/// Picks the smaller of two uniform draws, favouring low indices.
fn skewed_index(rng: &mut SmallRng, len: usize) -> usize {
    let first = rng.gen_range(0..len);
    let second = rng.gen_range(0..len);
    first.min(second)
}
