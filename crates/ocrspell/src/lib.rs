//! Spell checking and autocorrection for noisy OCR text.
//!
//! A [`Lexicon`](lexicon::Lexicon) combines a packed, read-only word graph
//! with a small set of user words. A [`SpellChecker`](checker::SpellChecker)
//! repairs text word by word: tokens that look like URLs, e-mail addresses,
//! proper nouns or numbers are passed through, everything else is replaced
//! by the closest dictionary word within a small edit distance.
//!
//! # Architecture
//!
//! - [`lexicon`] -- word graph plus user-word overflow, resource loading
//! - [`speller`] -- the membership seam used by the suggestion search
//! - [`suggestion`] -- depth-bounded search over single-character edits
//! - [`tokenizer`] -- whitespace splitting, re-splitting and preservation rules
//! - [`checker`] -- `auto_correct` entry point

pub mod checker;
pub mod lexicon;
pub mod speller;
pub mod suggestion;
pub mod tokenizer;

pub use checker::{SpellCheckOptions, SpellChecker};
pub use lexicon::{Lexicon, LexiconError};
pub use speller::Speller;
