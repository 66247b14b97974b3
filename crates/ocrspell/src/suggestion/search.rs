// Depth-bounded search over single-character edits.

use crate::speller::Speller;

use super::edits::EditOperation;
use super::status::SuggestionStatus;

/// Words shorter than this are never edited.
pub const MINIMUM_LENGTH: usize = 3;

/// Default edit budget.
pub const EDIT_THRESHOLD: usize = 1;

/// Finds the dictionary word closest to a misspelled word.
///
/// Starting from the lowercased input, every deletion, insertion and
/// substitution is tried recursively until the edit budget is spent. The
/// word reached with the fewest edits wins; among equally distant words the
/// first one reached wins, with deletions tried before insertions before
/// substitutions, each from the left.
///
/// The result is that of the exhaustive search. Two shortcuts keep it
/// affordable: a `(candidate, remaining)` state with budget left is searched
/// once, and a branch is skipped once it can no longer produce a strictly
/// better match.
/// A candidate that is itself a word is never edited further.
#[derive(Debug, Clone, Copy)]
pub struct EditSearch {
    min_length: usize,
}

impl Default for EditSearch {
    fn default() -> Self {
        Self::new(MINIMUM_LENGTH)
    }
}

impl EditSearch {
    /// Create a search that does not edit candidates shorter than `min_length`.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Return the best dictionary word within `threshold` edits of `word`.
    pub fn suggest(&self, speller: &dyn Speller, word: &str, threshold: usize) -> Option<String> {
        let word: Vec<char> = word.to_lowercase().chars().collect();
        let mut status = SuggestionStatus::new();
        self.search(speller, &mut status, &word, threshold);

        log::trace!(
            "suggestion search for {:?}: {} lookups, best {:?}",
            word.iter().collect::<String>(),
            status.cost(),
            status.best()
        );
        status.into_best()
    }

    /// Run the search into an existing status.
    pub fn search(
        &self,
        speller: &dyn Speller,
        status: &mut SuggestionStatus,
        candidate: &[char],
        remaining: usize,
    ) {
        if !status.can_improve(remaining) {
            return;
        }
        let text: String = candidate.iter().collect();
        // Leaves are only looked up, never memoized.
        if remaining > 0 && !status.mark_explored(&text, remaining) {
            return;
        }

        status.charge();
        if speller.spell(&text) {
            status.record(text, remaining);
            return;
        }

        if remaining == 0 || candidate.len() < self.min_length {
            return;
        }

        for op in EditOperation::ALL {
            op.for_each_variant(candidate, |variant| {
                self.search(speller, status, variant, remaining - 1);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::mock::MockSpeller;

    fn suggest(words: &[&str], word: &str, threshold: usize) -> Option<String> {
        let speller = MockSpeller::new(words);
        EditSearch::default().suggest(&speller, word, threshold)
    }

    /// Literal exhaustive search without any shortcut.
    fn exhaustive(speller: &dyn Speller, best: &mut Option<(String, usize)>, word: &[char], depth: usize) {
        let text: String = word.iter().collect();
        if speller.spell(&text) {
            if best.as_ref().is_none_or(|(_, d)| depth > *d) {
                *best = Some((text, depth));
            }
            return;
        }
        if depth == 0 || word.len() < MINIMUM_LENGTH {
            return;
        }
        for op in EditOperation::ALL {
            op.for_each_variant(word, |v| exhaustive(speller, best, v, depth - 1));
        }
    }

    #[test]
    fn single_deletion_is_repaired() {
        assert_eq!(suggest(&["hello"], "helo", 1).as_deref(), Some("hello"));
    }

    #[test]
    fn two_edits_away_is_out_of_budget() {
        assert_eq!(suggest(&["hello"], "axlo", 1), None);
    }

    #[test]
    fn known_word_is_returned_unchanged() {
        assert_eq!(suggest(&["hello", "help"], "help", 1).as_deref(), Some("help"));
        assert_eq!(suggest(&["hello"], "hello", 0).as_deref(), Some("hello"));
    }

    #[test]
    fn input_is_lowercased() {
        assert_eq!(suggest(&["hello"], "HELO", 1).as_deref(), Some("hello"));
    }

    #[test]
    fn substitution_and_insertion_are_repaired() {
        assert_eq!(suggest(&["world"], "wprld", 1).as_deref(), Some("world"));
        assert_eq!(suggest(&["world"], "worlds", 1).as_deref(), Some("world"));
        assert_eq!(suggest(&["world"], "wrld", 1).as_deref(), Some("world"));
    }

    #[test]
    fn deletion_wins_ties_over_substitution() {
        // "bat" (delete 's') and "bits" (substitute 'a') are both one edit away.
        assert_eq!(suggest(&["bits", "bat"], "bats", 1).as_deref(), Some("bat"));
    }

    #[test]
    fn leftmost_substitution_wins_ties() {
        assert_eq!(suggest(&["cat", "bat"], "xat", 1).as_deref(), Some("bat"));
    }

    #[test]
    fn fewer_edits_beat_earlier_discovery() {
        // "cattle" needs two insertions, "cat" one deletion.
        assert_eq!(suggest(&["cattle", "cat"], "catt", 2).as_deref(), Some("cat"));
    }

    #[test]
    fn short_words_are_not_edited() {
        assert_eq!(suggest(&["abc"], "ab", 1), None);
        assert_eq!(suggest(&["abc"], "abd", 1).as_deref(), Some("abc"));
        // A short word that is itself known still matches.
        assert_eq!(suggest(&["ab"], "ab", 1).as_deref(), Some("ab"));
    }

    #[test]
    fn edits_may_pass_through_short_candidates() {
        // "abcd" -> "abc" (len 3, still editable) -> "ab".
        assert_eq!(suggest(&["ab"], "abcd", 2).as_deref(), Some("ab"));
        // "abc" -> "ab" (len 2) cannot be edited on to "b".
        assert_eq!(suggest(&["b"], "abc", 2), None);
    }

    #[test]
    fn custom_minimum_length() {
        let speller = MockSpeller::new(&["at"]);
        assert_eq!(EditSearch::new(2).suggest(&speller, "ax", 1).as_deref(), Some("at"));
        assert_eq!(EditSearch::new(3).suggest(&speller, "ax", 1), None);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        assert_eq!(suggest(&[], "xyzzy", 1), None);
    }

    #[test]
    fn exact_hit_needs_one_lookup() {
        let speller = MockSpeller::new(&["hello"]);
        EditSearch::default().suggest(&speller, "hello", 1);
        assert_eq!(speller.lookups(), 1);
    }

    #[test]
    fn leaf_states_are_not_memoized() {
        let speller = MockSpeller::new(&["hello"]);
        let mut status = SuggestionStatus::new();
        let garbage = vec!['q'; 200];
        EditSearch::default().search(&speller, &mut status, &garbage, 1);
        assert_eq!(status.best(), None);
        assert_eq!(status.explored_len(), 1);
        // Root plus 200 deletions, 201 * 26 insertions, 200 * 26 substitutions.
        assert_eq!(status.cost(), 1 + 200 + 201 * 26 + 200 * 26);
    }

    #[test]
    fn two_edit_search_memoizes_only_inner_states() {
        let speller = MockSpeller::new(&[]);
        let mut status = SuggestionStatus::new();
        let word: Vec<char> = "abcd".chars().collect();
        EditSearch::default().search(&speller, &mut status, &word, 2);
        // The root and its distinct one-edit neighbours.
        let mut inner = hashbrown::HashSet::new();
        for op in EditOperation::ALL {
            op.for_each_variant(&word, |v| {
                inner.insert(v.iter().collect::<String>());
            });
        }
        assert_eq!(status.explored_len(), 1 + inner.len());
    }

    #[test]
    fn matches_exhaustive_search() {
        let dictionary = ["cart", "card", "care", "cat", "scar", "carts", "arc"];
        let speller = MockSpeller::new(&dictionary);
        let search = EditSearch::default();
        for word in ["cxrt", "crat", "caer", "scart", "ca", "zzzz", "carx", "acr"] {
            for threshold in 0..=2 {
                let mut best = None;
                let chars: Vec<char> = word.chars().collect();
                exhaustive(&speller, &mut best, &chars, threshold);
                let expected = best.map(|(w, _)| w);
                assert_eq!(
                    search.suggest(&speller, word, threshold),
                    expected,
                    "word {word:?}, threshold {threshold}"
                );
            }
        }
    }
}
