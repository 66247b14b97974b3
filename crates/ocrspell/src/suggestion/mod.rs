// Suggestion search: bounded edit-distance correction of a single word.
//
// Architecture:
//   - `edits`: deletion / insertion / substitution neighbour generation
//   - `status`: best match so far, explored states, lookup cost
//   - `search`: depth-first search over edits, validated through a Speller

pub mod edits;
pub mod search;
pub mod status;

pub use edits::EditOperation;
pub use search::{EDIT_THRESHOLD, EditSearch, MINIMUM_LENGTH};
pub use status::SuggestionStatus;
