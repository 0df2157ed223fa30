//! Poem generation benchmarks.
//!
//! Builds a poet per representation once, then measures rewriting sentences
//! of increasing length.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bridgewords_benches::corpus::{SyntheticCorpus, SyntheticCorpusConfig};
use bridgewords_core::GraphKind;
use bridgewords_poet::GraphPoet;

const SEED: u64 = 7;
const VOCABULARY_SIZE: usize = 300;

/// Input sentence lengths, in words.
const SENTENCE_LENGTHS: &[usize] = &[8, 32, 128];

fn poem_generation(c: &mut Criterion) {
    let corpus = SyntheticCorpus::generate(&SyntheticCorpusConfig {
        vocabulary_size: VOCABULARY_SIZE,
        line_count: 60,
        words_per_line: 30,
        seed: SEED,
    })
    .expect("synthetic corpus generation must succeed");

    let mut group = c.benchmark_group("poem");
    for kind in GraphKind::ALL {
        let poet = GraphPoet::builder()
            .with_representation(kind)
            .build_from_lines(corpus.lines())
            .expect("indexing must succeed");
        for &length in SENTENCE_LENGTHS {
            let sentence = corpus.sample_sentence(length, SEED);
            group.bench_with_input(
                BenchmarkId::new(kind.as_str(), length),
                &sentence,
                |b, sentence| b.iter(|| poet.poem(sentence)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, poem_generation);
criterion_main!(benches);
