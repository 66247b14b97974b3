// Loaded word graph: edge arena plus membership trace.

use std::io::Read;

use crate::edge::Edge;
use crate::format::{self, DawgHeader};
use crate::DawgError;

/// Row index that never addresses a sibling row.
///
/// Leaf edges point here, and a graph whose `start` is this value has no
/// root row at all. Packed resources keep a placeholder edge at index 0.
pub const NO_ROW: usize = 0;

/// Immutable packed word graph.
///
/// The graph is a flat arena of [`Edge`] records. A node is represented by
/// its sibling row: the contiguous run of edges leaving it, terminated by the
/// edge whose last-sibling bit is set. Rows are not sorted, so lookup is a
/// linear scan.
#[derive(Clone, PartialEq, Eq)]
pub struct WordGraph {
    edges: Vec<Edge>,
    start: usize,
}

impl std::fmt::Debug for WordGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordGraph")
            .field("edge_count", &self.edges.len())
            .field("start", &self.start)
            .finish()
    }
}

impl WordGraph {
    /// Build a graph directly from an edge arena.
    pub fn from_edges(edges: Vec<Edge>, start: usize) -> Self {
        Self { edges, start }
    }

    /// Load a graph from a complete packed resource.
    ///
    /// Exactly `byte_len` bytes after the header are decoded as big-endian
    /// edges; anything after them is ignored. The load either succeeds
    /// completely or returns an error.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DawgError> {
        let (header, offset) = format::parse_header(data)?;
        Self::from_edge_block(header, &data[offset..], offset)
    }

    /// Load a graph from a reader yielding a packed resource.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DawgError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_edge_block(header: DawgHeader, block: &[u8], offset: usize) -> Result<Self, DawgError> {
        if block.len() < header.byte_len {
            return Err(DawgError::Truncated {
                expected: offset + header.byte_len,
                actual: offset + block.len(),
            });
        }

        let edge_count = header.edge_count();
        // The block may sit at any alignment, so the edges are copied out.
        let mut edges: Vec<Edge> = bytemuck::pod_collect_to_vec(&block[..edge_count * 4]);
        let mut word_ends = 0usize;
        for edge in &mut edges {
            edge.0 = u32::from_be(edge.0);
            if edge.is_word_end() {
                word_ends += 1;
            }
        }

        log::debug!(
            "loaded word graph: {} edges, {} word ends, root row at {}",
            edge_count,
            word_ends,
            header.start
        );

        Ok(Self {
            edges,
            start: header.start,
        })
    }

    /// Serialise the graph back into the packed resource layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let byte_len = self.edges.len() * 4;
        let mut out = Vec::with_capacity(byte_len + 24);
        format::write_header(self.start, byte_len, &mut out);
        for edge in &self.edges {
            out.extend_from_slice(&edge.0.to_be_bytes());
        }
        out
    }

    /// Index of the root's sibling row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of edges in the arena.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The raw edge arena.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether `index` addresses the beginning of a row.
    #[inline]
    fn is_row(&self, index: usize) -> bool {
        index != NO_ROW && index < self.edges.len()
    }

    /// Scan the sibling row beginning at `row` for an edge labelled `ch`.
    ///
    /// Returns the edge index, or `None` when the row is exhausted. A row that
    /// runs off the end of the arena without a last-sibling edge also yields
    /// `None`.
    pub fn find_edge_for_char(&self, row: usize, ch: char) -> Option<usize> {
        let mut index = row;
        while let Some(edge) = self.edges.get(index) {
            if edge.letter_char() == Some(ch) {
                return Some(index);
            }
            if edge.is_last_sibling() {
                return None;
            }
            index += 1;
        }
        None
    }

    /// Trace `word` through the graph and return the index of the edge that
    /// consumes its last character.
    ///
    /// No case folding happens here: only `a`..=`z` can ever match.
    pub fn trace_to_last_edge(&self, word: &str) -> Option<usize> {
        if !self.is_row(self.start) {
            return None;
        }
        let mut chars = word.chars();
        let first = chars.next()?;
        let mut edge = self.find_edge_for_char(self.start, first)?;

        for ch in chars {
            let child = self.edges[edge].first_child_index();
            if !self.is_row(child) {
                return None;
            }
            edge = self.find_edge_for_char(child, ch)?;
        }

        Some(edge)
    }

    /// Whether `word` is a complete word of the graph.
    pub fn contains_word(&self, word: &str) -> bool {
        self.trace_to_last_edge(word)
            .is_some_and(|edge| self.edges[edge].is_word_end())
    }

    /// Enumerate every word reachable from the root, in row order.
    ///
    /// Paths are cut off at `edge_count` letters, which no well-formed
    /// acyclic graph reaches.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        if self.is_row(self.start) {
            let mut prefix = String::new();
            self.collect_words(self.start, &mut prefix, &mut words);
        }
        words
    }

    fn collect_words(&self, row: usize, prefix: &mut String, words: &mut Vec<String>) {
        if prefix.len() >= self.edges.len() {
            return;
        }
        let mut index = row;
        while let Some(&edge) = self.edges.get(index) {
            if let Some(ch) = edge.letter_char() {
                prefix.push(ch);
                if edge.is_word_end() {
                    words.push(prefix.clone());
                }
                let child = edge.first_child_index();
                if self.is_row(child) {
                    self.collect_words(child, prefix, words);
                }
                prefix.pop();
            }
            if edge.is_last_sibling() {
                break;
            }
            index += 1;
        }
    }
}
