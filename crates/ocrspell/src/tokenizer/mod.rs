// Tokenization of OCR text: whitespace split and word re-split.

pub mod preserve;

use std::sync::OnceLock;

use regex::Regex;

/// Anything that is not an ASCII word character separates word pieces.
fn non_word() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid separator pattern"))
}

/// Split text on runs of ASCII whitespace (space, tab, line feed, vertical
/// tab, form feed, carriage return). Other Unicode spaces stay inside tokens.
pub fn whitespace_tokens(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        .filter(|token| !token.is_empty())
}

/// Split a token into word pieces.
///
/// `|` is read as `l`, a frequent OCR confusion, then the token is split on
/// every character outside `[A-Za-z0-9_]`. Empty pieces are dropped.
pub fn split_word_pieces(token: &str) -> Vec<String> {
    let token = token.replace('|', "l");
    non_word()
        .split(&token)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse() {
        let tokens: Vec<_> = whitespace_tokens("  one\ttwo \n three  ").collect();
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn only_ascii_whitespace_separates_tokens() {
        let tokens: Vec<_> = whitespace_tokens("a\u{a0}b c\x0Bd\x0Ce\r\nf").collect();
        assert_eq!(tokens, vec!["a\u{a0}b", "c", "d", "e", "f"]);
        let tokens: Vec<_> = whitespace_tokens("x\u{2003}y").rev().collect();
        assert_eq!(tokens, vec!["x\u{2003}y"]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert_eq!(whitespace_tokens("   \n").count(), 0);
    }

    #[test]
    fn bar_is_read_as_ell() {
        assert_eq!(split_word_pieces("he||o"), vec!["hello"]);
        assert_eq!(split_word_pieces("|ike"), vec!["like"]);
    }

    #[test]
    fn punctuation_splits_pieces() {
        assert_eq!(split_word_pieces("word,"), vec!["word"]);
        assert_eq!(split_word_pieces("don't"), vec!["don", "t"]);
        assert_eq!(split_word_pieces("(a-b)"), vec!["a", "b"]);
        assert_eq!(split_word_pieces("snake_case"), vec!["snake_case"]);
    }

    #[test]
    fn non_ascii_letters_split() {
        assert_eq!(split_word_pieces("caf\u{00E9}s"), vec!["caf", "s"]);
    }

    #[test]
    fn all_punctuation_yields_nothing() {
        assert!(split_word_pieces("...").is_empty());
        assert!(split_word_pieces("").is_empty());
    }
}
