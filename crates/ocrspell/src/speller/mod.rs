// Spell checking seam between the lexicon and the suggestion search.

use crate::lexicon::Lexicon;

/// Trait for word membership checks.
///
/// The suggestion search only needs to know whether a candidate is a
/// dictionary word, so it depends on this trait rather than on [`Lexicon`].
pub trait Speller {
    /// Whether `word` is a known word.
    fn spell(&self, word: &str) -> bool;
}

impl Speller for Lexicon {
    fn spell(&self, word: &str) -> bool {
        self.contains_word(word)
    }
}

impl<S: Speller + ?Sized> Speller for &S {
    fn spell(&self, word: &str) -> bool {
        (**self).spell(word)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_spells_graph_and_user_words() {
        let mut lexicon = Lexicon::with_graph(ocrspell_dawg::build_word_graph(["koala"]).unwrap());
        lexicon.add("Wombat");
        assert!(lexicon.spell("koala"));
        assert!(lexicon.spell("wombat"));
        assert!(!lexicon.spell("emu"));
    }

    #[test]
    fn reference_forwards_to_speller() {
        fn spells_emu(speller: impl Speller) -> bool {
            speller.spell("emu")
        }
        let s = mock::MockSpeller::new(&["emu"]);
        assert!(spells_emu(&s));
        assert_eq!(s.lookups(), 1);
    }
}
