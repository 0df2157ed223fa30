//! Poem generation over an indexed corpus.

use std::{fmt, io::BufRead, path::Path};

use bridgewords_core::{Graph, GraphKind};
use tracing::{Span, field, instrument};

use crate::{
    bridge::select_bridge,
    builder::PoetBuilder,
    error::Result,
    indexer::IndexedCorpus,
    normalize::Token,
};

/// Inserts bridge words into sentences using a word-adjacency graph.
///
/// The graph is built once from a corpus and is never mutated afterwards.
pub struct GraphPoet {
    graph: Box<dyn Graph<String>>,
    corpus_words: Vec<String>,
    representation: GraphKind,
}

impl GraphPoet {
    /// Returns a builder for configuring the graph representation.
    #[must_use]
    pub fn builder() -> PoetBuilder {
        PoetBuilder::new()
    }

    /// Indexes an in-memory corpus using the default representation.
    ///
    /// # Errors
    /// Returns [`crate::PoetError`] when indexing fails.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::builder().build_from_lines(lines)
    }

    /// Indexes a corpus read line by line using the default representation.
    ///
    /// # Errors
    /// Returns [`crate::PoetError`] when reading or indexing fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::builder().build_from_reader(reader)
    }

    /// Indexes the corpus file at `path` using the default representation.
    ///
    /// # Errors
    /// Returns [`crate::PoetError::File`] when the file cannot be read, or
    /// another [`crate::PoetError`] when indexing fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().build_from_path(path)
    }

    pub(crate) fn from_corpus(corpus: IndexedCorpus, representation: GraphKind) -> Self {
        let (graph, corpus_words) = corpus.into_parts();
        Self {
            graph,
            corpus_words,
            representation,
        }
    }

    /// Returns the normalised corpus words in reading order.
    #[must_use]
    pub fn corpus_words(&self) -> &[String] {
        &self.corpus_words
    }

    /// Returns the word-adjacency graph.
    #[must_use]
    pub fn graph(&self) -> &dyn Graph<String> {
        self.graph.as_ref()
    }

    /// Returns the representation backing the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn representation(&self) -> GraphKind { self.representation }

    /// Rewrites `input`, inserting a bridge word between every pair of
    /// neighbouring words that the corpus links through a third word.
    ///
    /// Input words keep their case. Punctuation inside a token is moved after
    /// its word characters. Words are rejoined with single spaces. Input that
    /// is empty or only whitespace is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use bridgewords_poet::GraphPoet;
    ///
    /// let poet = GraphPoet::from_lines(["Seek to explore strange new life and new civilizations"])?;
    /// assert_eq!(poet.poem("TO EXPLORE NEW worlds"), "TO EXPLORE strange NEW worlds");
    /// assert_eq!(poet.poem("hello world"), "hello world");
    /// # Ok::<(), bridgewords_poet::PoetError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "poet.poem",
        level = "debug",
        skip_all,
        fields(words = field::Empty, bridges = field::Empty),
    )]
    pub fn poem(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return input.to_owned();
        }

        let tokens: Vec<Token> = input.split_whitespace().map(Token::parse).collect();
        let mut poem = String::with_capacity(input.len() * 2);
        let mut bridges = 0_usize;

        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                poem.push(' ');
            }
            token.render_into(&mut poem);

            let Some(next) = tokens.get(index + 1) else {
                continue;
            };
            if let Some(bridge) =
                select_bridge(self.graph.as_ref(), &token.normalized(), &next.normalized())
            {
                poem.push(' ');
                poem.push_str(bridge.word());
                bridges += 1;
            }
        }

        let span = Span::current();
        span.record("words", tokens.len());
        span.record("bridges", bridges);
        poem
    }
}

impl fmt::Debug for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphPoet")
            .field("representation", &self.representation)
            .field("corpus_words", &self.corpus_words.len())
            .field("vertices", &self.graph.vertex_count())
            .finish()
    }
}

impl fmt::Display for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphPoet with {} words in corpus", self.corpus_words.len())
    }
}
