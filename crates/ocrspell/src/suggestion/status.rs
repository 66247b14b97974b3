// Suggestion search state: best match, explored states, lookup cost.

use hashbrown::HashSet;

/// Tracks one run of the suggestion search.
///
/// A match is recorded together with the edit budget that was still left
/// when it was found; a later match replaces it only if strictly more
/// budget was left, so among equally distant words the first one found wins.
#[derive(Debug, Default)]
pub struct SuggestionStatus {
    best: Option<(String, usize)>,
    /// `(candidate, remaining)` states already searched.
    explored: HashSet<(String, usize)>,
    /// Number of dictionary lookups performed.
    cost: usize,
}

impl SuggestionStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a match found with `remaining` budget could replace the
    /// current best.
    pub fn can_improve(&self, remaining: usize) -> bool {
        self.best.as_ref().is_none_or(|(_, depth)| remaining > *depth)
    }

    /// Offer a dictionary word found with `remaining` budget left.
    ///
    /// Returns `true` if it became the new best match.
    pub fn record(&mut self, word: String, remaining: usize) -> bool {
        if !self.can_improve(remaining) {
            return false;
        }
        self.best = Some((word, remaining));
        true
    }

    /// Mark a state as searched. Returns `false` if it already was.
    pub fn mark_explored(&mut self, candidate: &str, remaining: usize) -> bool {
        self.explored.insert((candidate.to_string(), remaining))
    }

    /// Number of states marked as searched.
    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    /// Increment the lookup counter.
    pub fn charge(&mut self) {
        self.cost += 1;
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    /// The best match so far and its remaining budget.
    pub fn best(&self) -> Option<(&str, usize)> {
        self.best.as_ref().map(|(w, d)| (w.as_str(), *d))
    }

    /// Consume the status and return the best match, if any.
    pub fn into_best(self) -> Option<String> {
        self.best.map(|(w, _)| w)
    }
}
