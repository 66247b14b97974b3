// Minimal word-graph construction from a word list.

use std::collections::BTreeMap;

use hashbrown::HashMap;

use crate::edge::{letter_index, Edge, MAX_CHILD_INDEX};
use crate::graph::{WordGraph, NO_ROW};
use crate::DawgError;

/// Trie node used while collecting words.
#[derive(Debug, Default)]
struct TrieNode {
    /// Child node per packed letter, kept sorted for deterministic output.
    children: BTreeMap<u8, usize>,
    /// Whether the path to this node spells a word.
    word_end: bool,
}

/// Incremental word-graph builder.
///
/// Words may be inserted in any order. [`GraphBuilder::finish`] merges
/// identical child rows, so the packed result shares common suffixes.
#[derive(Debug)]
pub struct GraphBuilder {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Number of distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Insert one word. Empty words are ignored.
    ///
    /// Only `a`..=`z` can be packed; anything else is rejected without
    /// modifying the builder.
    pub fn insert(&mut self, word: &str) -> Result<(), DawgError> {
        let letters = word
            .chars()
            .map(|ch| {
                letter_index(ch).ok_or_else(|| DawgError::InvalidLetter {
                    word: word.to_string(),
                    ch,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if letters.is_empty() {
            return Ok(());
        }

        let mut node = 0;
        for letter in letters {
            node = match self.nodes[node].children.get(&letter) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(letter, child);
                    child
                }
            };
        }
        if !self.nodes[node].word_end {
            self.nodes[node].word_end = true;
            self.word_count += 1;
        }
        Ok(())
    }

    /// Pack the collected words into a [`WordGraph`].
    pub fn finish(self) -> Result<WordGraph, DawgError> {
        let mut packer = RowPacker {
            nodes: &self.nodes,
            edges: vec![Edge::default()],
            rows: HashMap::new(),
        };
        let start = packer.intern(0)?;

        log::debug!(
            "packed {} words into {} edges ({} distinct rows)",
            self.word_count,
            packer.edges.len(),
            packer.rows.len()
        );

        Ok(WordGraph::from_edges(packer.edges, start as usize))
    }
}

/// Emits sibling rows children-first, reusing any row already emitted.
struct RowPacker<'a> {
    nodes: &'a [TrieNode],
    edges: Vec<Edge>,
    /// Packed row contents to the index where that row was emitted.
    rows: HashMap<Vec<Edge>, u32>,
}

impl RowPacker<'_> {
    /// Return the row index holding `node`'s outgoing edges, emitting it if
    /// needed. Leaves map to [`NO_ROW`].
    fn intern(&mut self, node: usize) -> Result<u32, DawgError> {
        let nodes = self.nodes;
        let children = &nodes[node].children;
        if children.is_empty() {
            return Ok(NO_ROW as u32);
        }

        let last = children.len() - 1;
        let mut row = Vec::with_capacity(children.len());
        for (i, (&letter, &child)) in children.iter().enumerate() {
            let child_row = self.intern(child)?;
            row.push(Edge::new(child_row, nodes[child].word_end, i == last, letter));
        }

        if let Some(&index) = self.rows.get(&row) {
            return Ok(index);
        }

        let index = self.edges.len();
        if index > MAX_CHILD_INDEX as usize {
            return Err(DawgError::TooManyEdges {
                count: index + row.len(),
            });
        }
        self.edges.extend_from_slice(&row);
        self.rows.insert(row, index as u32);
        Ok(index as u32)
    }
}

/// Build a minimal word graph from `words`.
pub fn build_word_graph<I, S>(words: I) -> Result<WordGraph, DawgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GraphBuilder::new();
    for word in words {
        builder.insert(word.as_ref())?;
    }
    builder.finish()
}
