//! Packed DAWG (directed acyclic word graph) engine.
//!
//! This crate loads the binary word-graph resource used by the ocrspell
//! dictionary and answers a single question about it: does a given path of
//! letters end at a word boundary?
//!
//! # Architecture
//!
//! - [`edge`] -- 32-bit packed edge records and letter encoding
//! - [`format`] -- `DAWG:<start>:<byte_len>:` header parsing and writing
//! - [`graph`] -- the loaded edge arena and its membership trace
//! - [`builder`] -- minimal graph construction from a word list

pub mod builder;
pub mod edge;
pub mod format;
pub mod graph;

pub use builder::build_word_graph;
pub use edge::Edge;
pub use graph::WordGraph;

/// Error type for word-graph parsing, loading and building.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
    #[error("invalid magic token in DAWG header")]
    InvalidMagic,
    #[error("missing ':' delimiter after {field} field")]
    MissingDelimiter { field: &'static str },
    #[error("unparsable {field} field: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("negative {field} field: {value}")]
    Negative { field: &'static str, value: i64 },
    #[error("resource too short: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("word {word:?} contains {ch:?}, only 'a'..='z' can be packed")]
    InvalidLetter { word: String, ch: char },
    #[error("graph needs {count} edges, child indices are limited to 24 bits")]
    TooManyEdges { count: usize },
    #[error("failed to read word graph: {0}")]
    Io(#[from] std::io::Error),
}
