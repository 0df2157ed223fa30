//! Bridge-word poet built on the bridgewords graph ADT.
//!
//! A corpus is indexed into a word-adjacency graph: each normalised word is a
//! vertex and each edge counts how often one word directly follows another.
//! [`GraphPoet::poem`] then walks an input sentence and, between every pair of
//! neighbouring words, inserts the word that most strongly links them in the
//! corpus.
//!
//! # Examples
//! ```
//! use bridgewords_poet::GraphPoet;
//!
//! let poet = GraphPoet::from_lines(["Seek to explore strange new life and new civilizations"])?;
//! assert_eq!(
//!     poet.poem("Seek to explore new and exciting synergies!"),
//!     "Seek to explore strange new life and exciting synergies!",
//! );
//! # Ok::<(), bridgewords_poet::PoetError>(())
//! ```

mod bridge;
mod builder;
mod error;
mod indexer;
mod normalize;
mod poet;

pub use bridgewords_core::{Graph, GraphError, GraphKind, Weight};

pub use crate::{
    bridge::{Bridge, select_bridge},
    builder::PoetBuilder,
    error::{PoetError, PoetErrorCode, Result},
    indexer::{CorpusIndexer, IndexedCorpus},
    normalize::{Token, normalize_word},
    poet::GraphPoet,
};
