// Single-character edit operations.

/// Letters tried by insertion and substitution.
pub const LETTERS: std::ops::RangeInclusive<char> = 'a'..='z';

/// One class of single-character edit.
///
/// [`EditOperation::ALL`] lists them in the order the search applies them,
/// which decides which of two equally distant words is suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    /// Remove the character at each position.
    Deletion,
    /// Insert each letter at each of the `len + 1` positions.
    Insertion,
    /// Replace the character at each position with each letter, including
    /// the letter already there.
    Substitution,
}

impl EditOperation {
    pub const ALL: [EditOperation; 3] = [
        EditOperation::Deletion,
        EditOperation::Insertion,
        EditOperation::Substitution,
    ];

    /// Number of variants this operation produces for a word of `len` characters.
    pub fn variant_count(self, len: usize) -> usize {
        let letters = LETTERS.count();
        match self {
            EditOperation::Deletion => len,
            EditOperation::Insertion => letters * (len + 1),
            EditOperation::Substitution => letters * len,
        }
    }

    /// Call `visit` with every variant of `word`, position by position and
    /// letter by letter in alphabetical order.
    pub fn for_each_variant<F>(self, word: &[char], mut visit: F)
    where
        F: FnMut(&[char]),
    {
        let len = word.len();
        let mut buffer: Vec<char> = Vec::with_capacity(len + 1);
        match self {
            EditOperation::Deletion => {
                for i in 0..len {
                    buffer.clear();
                    buffer.extend_from_slice(&word[..i]);
                    buffer.extend_from_slice(&word[i + 1..]);
                    visit(&buffer);
                }
            }
            EditOperation::Insertion => {
                for i in 0..=len {
                    for letter in LETTERS {
                        buffer.clear();
                        buffer.extend_from_slice(&word[..i]);
                        buffer.push(letter);
                        buffer.extend_from_slice(&word[i..]);
                        visit(&buffer);
                    }
                }
            }
            EditOperation::Substitution => {
                buffer.extend_from_slice(word);
                for i in 0..len {
                    for letter in LETTERS {
                        buffer[i] = letter;
                        visit(&buffer);
                    }
                    buffer[i] = word[i];
                }
            }
        }
    }
}
