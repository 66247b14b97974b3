// Preservation rules: tokens that are passed through without correction.

use std::sync::OnceLock;

use regex::Regex;

/// Compiled preservation patterns.
struct Patterns {
    email: Regex,
    capitalized: Regex,
    number: Regex,
    ordinal: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        email: Regex::new(r"^[A-Za-z0-9_]+@[A-Za-z0-9_]+(\.[a-z]{2,4})+$").expect("valid e-mail pattern"),
        capitalized: Regex::new(r"^[A-Z][a-z]{2,}$").expect("valid capitalized pattern"),
        number: Regex::new(r"^[0-9]+$").expect("valid number pattern"),
        ordinal: Regex::new(r"^[0-9]+(th|rd|st|nd)$").expect("valid ordinal pattern"),
    })
}

/// Whether a whitespace token is kept verbatim before it is split into
/// word pieces: anything containing `http`, or an e-mail address.
///
/// The `www` rule looks for the literal text `www\.`, backslash included.
pub fn is_preserved_before(token: &str) -> bool {
    token.contains("http") || token.contains(r"www\.") || patterns().email.is_match(token)
}

/// Whether a word piece is kept verbatim instead of corrected: a
/// capitalized word of three or more letters, a number, or an ordinal.
pub fn is_preserved_after(piece: &str) -> bool {
    let p = patterns();
    p.capitalized.is_match(piece) || p.number.is_match(piece) || p.ordinal.is_match(piece)
}
