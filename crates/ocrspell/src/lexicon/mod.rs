// Lexicon: packed word graph plus user-word overflow.

pub mod user_words;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use ocrspell_dawg::{DawgError, WordGraph};

pub use user_words::UserDictionary;

/// Error type for lexicon construction and loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The packed word graph was malformed.
    #[error("malformed word graph: {0}")]
    Graph(#[from] DawgError),

    /// A resource file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word-list stream failed mid-read.
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// Dictionary backed by a packed word graph, extended with user words.
///
/// The graph is immutable once loaded. User words are append-only and
/// stored lowercase. Membership checks the graph first with the word exactly
/// as given, then the user words case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    graph: Option<WordGraph>,
    user_words: UserDictionary,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexicon from an optional packed graph file and an optional
    /// plain-text user-word file.
    pub fn from_files(
        packed_words: Option<&Path>,
        user_words: Option<&Path>,
    ) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        if let Some(path) = packed_words {
            lexicon.add_packed_words_from_file(path)?;
        }
        if let Some(path) = user_words {
            lexicon.add_user_words_from_file(path)?;
        }
        Ok(lexicon)
    }

    /// Create a lexicon around an already built graph.
    pub fn with_graph(graph: WordGraph) -> Self {
        Self {
            graph: Some(graph),
            user_words: UserDictionary::new(),
        }
    }

    /// Load a packed word graph, replacing any graph loaded before.
    ///
    /// On error the lexicon is left unchanged.
    pub fn add_packed_words(&mut self, data: &[u8]) -> Result<(), LexiconError> {
        let graph = WordGraph::from_bytes(data)?;
        self.graph = Some(graph);
        Ok(())
    }

    pub fn add_packed_words_from_file(&mut self, path: &Path) -> Result<(), LexiconError> {
        let data = std::fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_packed_words(&data)?;
        log::debug!("loaded packed words from {}", path.display());
        Ok(())
    }

    /// Add one user word per line.
    ///
    /// Lines are passed to [`Lexicon::add`] as read, except that empty lines
    /// are skipped instead of adding the empty word, which no token can
    /// ever be looked up as.
    ///
    /// Returns the number of words that were new to the lexicon.
    pub fn add_user_words<R: BufRead>(&mut self, reader: R) -> Result<usize, LexiconError> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            if self.add(&line) {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn add_user_words_from_file(&mut self, path: &Path) -> Result<usize, LexiconError> {
        let io_error = |source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        let added = match self.add_user_words(BufReader::new(file)) {
            Err(LexiconError::Read(source)) => return Err(io_error(source)),
            other => other?,
        };
        log::debug!("added {} user words from {}", added, path.display());
        Ok(added)
    }

    /// Whether `word` is in the graph (exact case) or the user words
    /// (case-insensitive).
    pub fn contains_word(&self, word: &str) -> bool {
        if self.graph.as_ref().is_some_and(|g| g.contains_word(word)) {
            return true;
        }
        self.user_words.contains(word)
    }

    /// Add `word` to the user words unless the lexicon already knows it.
    ///
    /// Returns `true` if the word was added.
    pub fn add(&mut self, word: &str) -> bool {
        if self.contains_word(word) {
            return false;
        }
        self.user_words.insert(word)
    }

    /// Number of known words, if it can be determined.
    ///
    /// The word graph does not record its word count, so once a graph has
    /// been loaded the size is unknown and `None` is returned.
    pub fn size(&self) -> Option<usize> {
        match self.graph {
            Some(_) => None,
            None => Some(self.user_words.len()),
        }
    }

    /// Whether the lexicon holds neither a graph nor any user word.
    pub fn is_empty(&self) -> bool {
        self.graph.is_none() && self.user_words.is_empty()
    }

    /// Drop the graph and all user words.
    pub fn clear(&mut self) {
        self.graph = None;
        self.user_words.clear();
    }

    pub fn graph(&self) -> Option<&WordGraph> {
        self.graph.as_ref()
    }

    pub fn user_words(&self) -> &UserDictionary {
        &self.user_words
    }
}
