//! Per-sentence context tracking
//!
//! A [`ContextState`] lives for exactly one sentence scan. It is built by a
//! full first pass over the sentence so that cue words that appear after a
//! trigger still apply to it.

use crate::lexicon::LexiconStore;
use crate::lexicon::Modifier;
use crate::nlp::Token;

/// Intensity multiplier applied per intensifier
pub const INTENSIFIER_FACTOR: f64 = 1.5;
/// Intensity multiplier applied per diminisher
pub const DIMINISHER_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextState {
    /// Negation parity: toggled by each negation word
    pub negated: bool,
    /// Compounded modifier multiplier, starts at 1.0
    pub intensity: f64,
    /// Sticky once any conditional/causal cue is seen
    pub conditional: bool,
}

impl Default for ContextState {
    fn default() -> Self {
        Self {
            negated: false,
            intensity: 1.0,
            conditional: false,
        }
    }
}

impl ContextState {
    /// First pass: fold every token of a sentence into a fresh state
    pub fn from_tokens(tokens: &[Token], lexicon: &LexiconStore) -> Self {
        let mut state = Self::default();
        for token in tokens {
            state.update(token, lexicon);
        }
        state
    }

    /// Apply one token. Surface form is checked first, then the lemma.
    pub fn update(&mut self, token: &Token, lexicon: &LexiconStore) {
        if !self.update_word(&token.lower, lexicon) && token.lemma != token.lower {
            self.update_word(&token.lemma, lexicon);
        }
    }

    /// Returns whether the word carried a context role
    pub fn update_word(&mut self, word: &str, lexicon: &LexiconStore) -> bool {
        let context = lexicon.context_words();
        if context.is_negation(word) || lexicon.negated_form(word).is_some() {
            self.negated = !self.negated;
            return true;
        }
        if context.is_conditional(word) {
            self.conditional = true;
            return true;
        }
        match lexicon.modifiers().get(word) {
            Some(Modifier::Intensifier) => {
                self.intensity *= INTENSIFIER_FACTOR;
                true
            }
            Some(Modifier::Diminisher) => {
                self.intensity *= DIMINISHER_FACTOR;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconProfile;

    fn lexicon() -> LexiconStore {
        LexiconStore::from_profile(LexiconProfile::Core).unwrap()
    }

    fn feed(words: &[&str]) -> ContextState {
        let lexicon = lexicon();
        let mut state = ContextState::default();
        for word in words {
            state.update_word(word, &lexicon);
        }
        state
    }

    #[test]
    fn test_fresh_state() {
        let state = ContextState::default();
        assert!(!state.negated);
        assert!(!state.conditional);
        assert_eq!(state.intensity, 1.0);
    }

    #[test]
    fn test_negation_toggles() {
        assert!(feed(&["not"]).negated);
        assert!(!feed(&["not", "never"]).negated);
        assert!(feed(&["no", "not", "n't"]).negated);
    }

    #[test]
    fn test_negated_form_toggles() {
        assert!(feed(&["unhappy"]).negated);
        assert!(!feed(&["not", "unhappy"]).negated);
        assert!(feed(&["never", "not", "unafraid"]).negated);
    }

    #[test]
    fn test_modifiers_compound() {
        let state = feed(&["very", "really"]);
        assert!((state.intensity - 2.25).abs() < 1e-12);
        let state = feed(&["very", "slightly"]);
        assert!((state.intensity - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_conditional_is_sticky() {
        let state = feed(&["if", "happy", "then", "fine"]);
        assert!(state.conditional);
    }

    #[test]
    fn test_ordinary_words_are_ignored() {
        let state = feed(&["the", "happy", "cat"]);
        assert_eq!(state, ContextState::default());
    }

    #[test]
    fn test_lemma_fallback() {
        let lexicon = lexicon();
        let mut state = ContextState::default();
        // surface form unknown, lemma is a negation
        let token = Token::new("Nott", "not", "PART", "neg");
        state.update(&token, &lexicon);
        assert!(state.negated);
    }
}
