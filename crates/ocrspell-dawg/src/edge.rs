// Packed edge records of the word graph.

use bytemuck::{Pod, Zeroable};

/// Largest child index representable in the 24-bit field.
pub const MAX_CHILD_INDEX: u32 = 0x00FF_FFFF;

/// Number of letters in the packed alphabet (`a` through `z`).
pub const ALPHABET_SIZE: u8 = 26;

const WORD_END_BIT: u32 = 1 << 6;
const LAST_SIBLING_BIT: u32 = 1 << 5;
const RESERVED_BIT: u32 = 1 << 7;
const LETTER_MASK: u32 = 0x1F;

/// One edge of the word graph (4 bytes).
///
/// Bit layout, most significant first:
/// - bits 8-31: index of the first edge in the target node's child row
/// - bit 7: reserved, carried through but never interpreted
/// - bit 6: the path ending at this edge spells a word
/// - bit 5: this edge terminates its sibling row
/// - bits 0-4: letter, 1 through 26 for `a` through `z`
///
/// The value held here is already in native byte order; the big-endian
/// conversion happens once when the graph is loaded.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Edge(pub u32);

impl Edge {
    /// Pack an edge from its fields.
    ///
    /// `first_child` is truncated to 24 bits and `letter` to 5 bits.
    pub fn new(first_child: u32, is_word_end: bool, is_last_sibling: bool, letter: u8) -> Self {
        let mut data = (first_child & MAX_CHILD_INDEX) << 8;
        if is_word_end {
            data |= WORD_END_BIT;
        }
        if is_last_sibling {
            data |= LAST_SIBLING_BIT;
        }
        data |= letter as u32 & LETTER_MASK;
        Self(data)
    }

    /// Index of the first edge in this edge's child row.
    #[inline]
    pub fn first_child_index(self) -> usize {
        (self.0 >> 8) as usize
    }

    #[inline]
    pub fn reserved_bit(self) -> bool {
        self.0 & RESERVED_BIT != 0
    }

    /// Whether the path ending at this edge is a complete word.
    #[inline]
    pub fn is_word_end(self) -> bool {
        self.0 & WORD_END_BIT != 0
    }

    /// Whether this edge is the last one of its sibling row.
    #[inline]
    pub fn is_last_sibling(self) -> bool {
        self.0 & LAST_SIBLING_BIT != 0
    }

    /// Raw 5-bit letter value.
    #[inline]
    pub fn letter(self) -> u8 {
        (self.0 & LETTER_MASK) as u8
    }

    /// The letter as a lowercase character, or `None` for values outside 1..=26.
    #[inline]
    pub fn letter_char(self) -> Option<char> {
        letter_char(self.letter())
    }
}

/// Map a packed letter value (1..=26) to `a`..=`z`.
#[inline]
pub fn letter_char(letter: u8) -> Option<char> {
    if (1..=ALPHABET_SIZE).contains(&letter) {
        Some((b'a' + letter - 1) as char)
    } else {
        None
    }
}

/// Map `a`..=`z` to its packed letter value. Uppercase is not folded.
#[inline]
pub fn letter_index(ch: char) -> Option<u8> {
    if ch.is_ascii_lowercase() {
        Some(ch as u8 - b'a' + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_fields() {
        let e = Edge::new(1234, true, false, 3);
        assert_eq!(e.first_child_index(), 1234);
        assert!(e.is_word_end());
        assert!(!e.is_last_sibling());
        assert_eq!(e.letter(), 3);
        assert_eq!(e.letter_char(), Some('c'));
    }

    #[test]
    fn raw_layout_matches_bit_positions() {
        // child 1, word end, last sibling, letter 't' (20)
        let e = Edge::new(1, true, true, 20);
        assert_eq!(e.0, 0x0000_0100 | 0x40 | 0x20 | 20);
    }

    #[test]
    fn reserved_bit_is_ignored_by_accessors() {
        let plain = Edge::new(7, false, true, 1);
        let flagged = Edge(plain.0 | RESERVED_BIT);
        assert!(flagged.reserved_bit());
        assert_eq!(flagged.first_child_index(), 7);
        assert!(!flagged.is_word_end());
        assert!(flagged.is_last_sibling());
        assert_eq!(flagged.letter_char(), Some('a'));
    }

    #[test]
    fn child_index_uses_full_24_bits() {
        let e = Edge::new(MAX_CHILD_INDEX, false, false, 26);
        assert_eq!(e.first_child_index(), MAX_CHILD_INDEX as usize);
        assert_eq!(e.letter_char(), Some('z'));
    }

    #[test]
    fn letter_zero_and_out_of_range_have_no_char() {
        assert_eq!(Edge::new(0, false, false, 0).letter_char(), None);
        assert_eq!(Edge::new(0, false, false, 27).letter_char(), None);
    }

    #[test]
    fn letter_index_is_inverse_of_letter_char() {
        for ch in 'a'..='z' {
            let idx = letter_index(ch).unwrap();
            assert_eq!(letter_char(idx), Some(ch));
        }
        assert_eq!(letter_index('A'), None);
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('\u{00E4}'), None);
    }
}
