// SpellChecker: word-by-word autocorrection of OCR text.

use std::path::Path;

use crate::lexicon::{Lexicon, LexiconError};
use crate::suggestion::{EDIT_THRESHOLD, EditSearch, MINIMUM_LENGTH};
use crate::tokenizer::preserve::{is_preserved_after, is_preserved_before};
use crate::tokenizer::{split_word_pieces, whitespace_tokens};

/// Spell checker options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellCheckOptions {
    /// Edit budget used by [`SpellChecker::auto_correct`].
    pub edit_threshold: usize,
    /// Candidates shorter than this are not edited.
    pub min_length: usize,
}

impl Default for SpellCheckOptions {
    fn default() -> Self {
        Self {
            edit_threshold: EDIT_THRESHOLD,
            min_length: MINIMUM_LENGTH,
        }
    }
}

/// Autocorrects text against one [`Lexicon`].
///
/// Holds no state between calls apart from the lexicon itself.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    lexicon: Lexicon,
    options: SpellCheckOptions,
    search: EditSearch,
}

impl SpellChecker {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_options(lexicon, SpellCheckOptions::default())
    }

    pub fn with_options(lexicon: Lexicon, options: SpellCheckOptions) -> Self {
        Self {
            lexicon,
            options,
            search: EditSearch::new(options.min_length),
        }
    }

    /// Create a checker from a packed word graph file and an optional
    /// user-word file.
    pub fn from_files(packed_words: &Path, user_words: Option<&Path>) -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::from_files(Some(packed_words), user_words)?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    pub fn options(&self) -> SpellCheckOptions {
        self.options
    }

    /// Correct `text` word by word.
    ///
    /// Tokens are processed left to right and joined with single spaces:
    /// - a token containing `http`, or an e-mail address, is copied as-is;
    /// - otherwise it is split into word pieces (see
    ///   [`split_word_pieces`]), and each piece that is a capitalized word,
    ///   a number or an ordinal is copied as-is;
    /// - every other piece is replaced by its best suggestion, or dropped
    ///   from the output when there is none.
    pub fn auto_correct(&self, text: &str) -> String {
        log::debug!("received: {text:?}");

        // Pending tokens, next one on top.
        let mut stack: Vec<String> = whitespace_tokens(text).rev().map(str::to_string).collect();
        let mut output: Vec<String> = Vec::with_capacity(stack.len());

        while let Some(token) = stack.pop() {
            if is_preserved_before(&token) {
                log::trace!("preserved token {token:?}");
                output.push(token);
                continue;
            }

            let mut pieces = split_word_pieces(&token).into_iter();
            let Some(word) = pieces.next() else {
                continue;
            };
            stack.extend(pieces.rev());

            if is_preserved_after(&word) {
                log::trace!("preserved piece {word:?}");
                output.push(word);
                continue;
            }

            match self.suggestion(&word, self.options.edit_threshold) {
                Some(suggestion) => {
                    if suggestion != word {
                        log::trace!("corrected {word:?} to {suggestion:?}");
                    }
                    output.push(suggestion);
                }
                None => log::trace!("dropped {word:?}: no suggestion"),
            }
        }

        output.join(" ")
    }

    /// Best dictionary word within `threshold` edits of the lowercased
    /// `word`, or `None`.
    pub fn suggestion(&self, word: &str, threshold: usize) -> Option<String> {
        self.search.suggest(&self.lexicon, word, threshold)
    }
}
