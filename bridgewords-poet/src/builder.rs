//! Configures how a [`GraphPoet`] indexes its corpus.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use bridgewords_core::GraphKind;
use tracing::debug;

use crate::{
    error::{PoetError, Result},
    indexer::CorpusIndexer,
    poet::GraphPoet,
};

/// Builder for [`GraphPoet`].
///
/// # Examples
/// ```
/// use bridgewords_poet::{GraphKind, GraphPoet};
///
/// let poet = GraphPoet::builder()
///     .with_representation(GraphKind::EdgeList)
///     .build_from_lines(["a quick brown fox"])?;
/// assert_eq!(poet.representation(), GraphKind::EdgeList);
/// assert_eq!(poet.poem("a brown"), "a quick brown");
/// # Ok::<(), bridgewords_poet::PoetError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PoetBuilder {
    representation: GraphKind,
}

impl PoetBuilder {
    /// Creates a builder using the default representation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the graph representation used to index the corpus.
    #[must_use]
    pub const fn with_representation(mut self, representation: GraphKind) -> Self {
        self.representation = representation;
        self
    }

    /// Returns the configured representation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn representation(&self) -> GraphKind { self.representation }

    /// Indexes an in-memory corpus, one item per line.
    ///
    /// # Errors
    /// Returns [`PoetError`] when indexing fails.
    pub fn build_from_lines<I, S>(self, lines: I) -> Result<GraphPoet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let corpus = self.indexer().index(lines)?;
        Ok(GraphPoet::from_corpus(corpus, self.representation))
    }

    /// Indexes every line `reader` yields.
    ///
    /// # Errors
    /// Returns [`PoetError::Io`] when reading fails, or another
    /// [`PoetError`] when indexing fails.
    pub fn build_from_reader<R: BufRead>(self, reader: R) -> Result<GraphPoet> {
        let corpus = self.indexer().index_reader(reader)?;
        Ok(GraphPoet::from_corpus(corpus, self.representation))
    }

    /// Opens and indexes the corpus file at `path`.
    ///
    /// # Errors
    /// Returns [`PoetError::File`] when the file cannot be opened or read, or
    /// another [`PoetError`] when indexing fails.
    pub fn build_from_path(self, path: impl AsRef<Path>) -> Result<GraphPoet> {
        let path = path.as_ref();
        debug!(path = %path.display(), representation = %self.representation, "opening corpus");
        let file = File::open(path).map_err(|source| PoetError::File {
            path: path.to_path_buf(),
            source,
        })?;
        self.build_from_reader(BufReader::new(file))
            .map_err(|err| err.with_path(path.to_path_buf()))
    }

    fn indexer(self) -> CorpusIndexer {
        CorpusIndexer::new(self.representation.empty())
    }
}
