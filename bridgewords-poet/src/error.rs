//! Error types for corpus indexing and poem generation.

use std::{io, path::PathBuf};

use bridgewords_core::{GraphError, define_error_codes};
use thiserror::Error;

/// Error raised while reading or indexing a corpus.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PoetError {
    /// Reading lines from a caller-supplied reader failed.
    #[error("failed to read corpus: {source}")]
    Io {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Opening or reading a corpus file failed.
    #[error("failed to read corpus `{path}`: {source}")]
    File {
        /// Path of the corpus file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The graph rejected an update.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// An adjacency count no longer fits in an edge weight.
    #[error("adjacency count for `{source_word}` -> `{target_word}` overflowed")]
    WeightOverflow {
        /// Preceding word.
        source_word: String,
        /// Following word.
        target_word: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`PoetError`] variants.
    enum PoetErrorCode for PoetError {
        /// Reading lines from a caller-supplied reader failed.
        Io => Io { .. } => "POET_IO",
        /// Opening or reading a corpus file failed.
        File => File { .. } => "POET_FILE",
        /// The graph rejected an update.
        Graph => Graph(..) => "POET_GRAPH",
        /// An adjacency count overflowed.
        WeightOverflow => WeightOverflow { .. } => "POET_WEIGHT_OVERFLOW",
    }
}

impl PoetError {
    /// Attaches `path` to a reader failure so file-based callers report where
    /// the corpus came from.
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            Self::Io { source } => Self::File { path, source },
            other => other,
        }
    }
}

/// Convenient alias for results returned by the poet API.
pub type Result<T> = core::result::Result<T, PoetError>;
