//! Builds the word-adjacency graph from corpus lines.
//!
//! Every normalised word becomes a vertex. Each time word `w1` is directly
//! followed by `w2` the edge `w1 -> w2` gains one unit of weight. Adjacency
//! carries across line breaks: the last word of a line precedes the first word
//! of the next one.

use std::io::BufRead;

use bridgewords_core::Graph;
use tracing::{Span, field, instrument};

use crate::{
    error::{PoetError, Result},
    normalize::normalize_word,
};

/// Incremental corpus indexer.
///
/// Feed lines in corpus order with [`CorpusIndexer::feed_line`], then call
/// [`CorpusIndexer::finish`] to take the graph and word sequence.
///
/// # Examples
/// ```
/// use bridgewords_poet::{CorpusIndexer, GraphKind};
///
/// let mut indexer = CorpusIndexer::new(GraphKind::EdgeList.empty());
/// indexer.feed_line("To boldly go")?;
/// indexer.feed_line("where no one has gone before")?;
/// let corpus = indexer.finish();
///
/// assert_eq!(corpus.words().len(), 9);
/// assert_eq!(corpus.graph().weight(&"go".to_owned(), &"where".to_owned()), 1);
/// # Ok::<(), bridgewords_poet::PoetError>(())
/// ```
pub struct CorpusIndexer {
    graph: Box<dyn Graph<String>>,
    words: Vec<String>,
    previous: Option<String>,
    lines: usize,
}

impl CorpusIndexer {
    /// Starts indexing into `graph`, which is normally empty.
    #[must_use]
    pub fn new(graph: Box<dyn Graph<String>>) -> Self {
        Self {
            graph,
            words: Vec::new(),
            previous: None,
            lines: 0,
        }
    }

    /// Indexes every whitespace-separated token of `line`.
    ///
    /// Tokens that normalise to an empty string are skipped and do not break
    /// adjacency between their neighbours.
    ///
    /// # Errors
    /// Returns [`PoetError::WeightOverflow`] when an adjacency count no longer
    /// fits in a weight, or [`PoetError::Graph`] if the graph rejects an
    /// update.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.lines += 1;
        for token in line.split_whitespace() {
            let word = normalize_word(token);
            if word.is_empty() {
                continue;
            }
            self.accept(word)?;
        }
        Ok(())
    }

    /// Records `word`. On failure the word sequence and the preceding word
    /// are left as they were, so indexing can continue with later lines.
    fn accept(&mut self, word: String) -> Result<()> {
        if let Some(previous) = &self.previous {
            let count = self
                .graph
                .weight(previous, &word)
                .checked_add(1)
                .ok_or_else(|| PoetError::WeightOverflow {
                    source_word: previous.clone(),
                    target_word: word.clone(),
                })?;
            self.graph.set(previous.clone(), word.clone(), count)?;
        }
        self.graph.add(word.clone());
        self.words.push(word.clone());
        self.previous = Some(word);
        Ok(())
    }

    /// Indexes `lines` in order and finishes.
    ///
    /// # Errors
    /// Propagates failures from [`CorpusIndexer::feed_line`].
    pub fn index<I, S>(self, lines: I) -> Result<IndexedCorpus>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.index_fallible(lines.into_iter().map(Ok))
    }

    /// Indexes every line `reader` yields and finishes.
    ///
    /// # Errors
    /// Returns [`PoetError::Io`] when reading fails, otherwise propagates
    /// failures from [`CorpusIndexer::feed_line`].
    pub fn index_reader<R: BufRead>(self, reader: R) -> Result<IndexedCorpus> {
        self.index_fallible(
            reader
                .lines()
                .map(|line| line.map_err(|source| PoetError::Io { source })),
        )
    }

    #[instrument(
        name = "poet.index",
        skip_all,
        fields(lines = field::Empty, words = field::Empty, vertices = field::Empty),
    )]
    fn index_fallible<I, S>(mut self, lines: I) -> Result<IndexedCorpus>
    where
        I: IntoIterator<Item = Result<S>>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line?.as_ref())?;
        }
        let span = Span::current();
        span.record("lines", self.lines);
        span.record("words", self.words.len());
        span.record("vertices", self.graph.vertex_count());
        Ok(self.finish())
    }

    /// Returns the normalised words seen so far.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of lines fed so far, including blank ones.
    #[must_use]
    #[rustfmt::skip]
    pub const fn lines(&self) -> usize { self.lines }

    /// Stops indexing and hands back the graph and word sequence.
    #[must_use]
    pub fn finish(self) -> IndexedCorpus {
        IndexedCorpus {
            graph: self.graph,
            words: self.words,
        }
    }
}

/// The result of indexing a corpus.
pub struct IndexedCorpus {
    graph: Box<dyn Graph<String>>,
    words: Vec<String>,
}

impl IndexedCorpus {
    /// Returns the word-adjacency graph.
    #[must_use]
    pub fn graph(&self) -> &dyn Graph<String> {
        self.graph.as_ref()
    }

    /// Returns the normalised corpus words in reading order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Splits the corpus into its graph and word sequence.
    #[must_use]
    pub fn into_parts(self) -> (Box<dyn Graph<String>>, Vec<String>) {
        (self.graph, self.words)
    }
}
