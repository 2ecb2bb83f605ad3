//! Emotion scoring
//!
//! Each sentence is scanned twice: [`ContextState::from_tokens`] folds the
//! whole sentence first, then every trigger match is weighted by that final
//! context. Both the sentence reporter ([`SentenceScores`]) and the
//! text-wide [`EmotionAccumulator`] work on the same absolute contributions,
//! so the two scopes rank categories identically for identical tokens.

use tracing::trace;

use super::context::ContextState;
use crate::lexicon::LexiconStore;
use crate::nlp::Token;

/// Applied to a match when the sentence is negated
pub const NEGATION_FACTOR: f64 = -0.5;
/// Applied to a match when the sentence is hypothetical
pub const CONDITIONAL_FACTOR: f64 = 0.7;
/// Share of a negated match's magnitude credited to the opposite category
pub const OPPOSITE_WEIGHT: f64 = 0.7;

/// Emotion scores of a single sentence
#[derive(Debug, Clone)]
pub struct SentenceScores {
    magnitude: Vec<f64>,
    /// Category had a trigger of its own, not only opposite credit
    direct: Vec<bool>,
    matches: usize,
    context: ContextState,
}

impl SentenceScores {
    fn new(categories: usize, context: ContextState) -> Self {
        Self {
            magnitude: vec![0.0; categories],
            direct: vec![false; categories],
            matches: 0,
            context,
        }
    }

    fn add(&mut self, category: usize, score: f64) {
        self.magnitude[category] += score.abs();
    }

    /// Sum of absolute contributions per category, in lexicon order
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitude
    }

    /// Whether a trigger of this category appeared in the sentence
    pub fn is_direct(&self, category: usize) -> bool {
        self.direct.get(category).copied().unwrap_or(false)
    }

    /// Number of trigger tokens matched
    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches == 0
    }

    pub fn context(&self) -> &ContextState {
        &self.context
    }
}

/// Score one sentence in isolation with a fresh context
pub fn score_sentence(tokens: &[Token], lexicon: &LexiconStore) -> SentenceScores {
    let context = ContextState::from_tokens(tokens, lexicon);
    let mut scores = SentenceScores::new(lexicon.len(), context);

    for token in tokens {
        let Some(category) = match_trigger(token, lexicon) else {
            continue;
        };

        let mut score = context.intensity;
        if context.negated {
            score *= NEGATION_FACTOR;
        }
        if context.conditional {
            score *= CONDITIONAL_FACTOR;
        }
        scores.add(category, score);
        scores.direct[category] = true;

        if context.negated {
            if let Some(opposite) = lexicon.opposites().get(category) {
                scores.add(opposite, OPPOSITE_WEIGHT * score.abs());
            }
        }

        scores.matches += 1;
        trace!(word = %token.lower, category, score, "trigger matched");
    }

    scores
}

/// Lemma first, surface form as a fallback for lemmatiser misses. A negated
/// form matches its base trigger's category; its negation is already in the
/// context parity.
fn match_trigger(token: &Token, lexicon: &LexiconStore) -> Option<usize> {
    let lookup = |word: &str| {
        lexicon
            .category_for(word)
            .or_else(|| lexicon.negated_form(word))
    };
    lookup(&token.lemma).or_else(|| lookup(&token.lower))
}

/// Running per-category totals for one full-text analysis
///
/// Totals can only be read through [`EmotionAccumulator::finish`], which
/// consumes the accumulator once the whole token stream has been scored.
#[derive(Debug, Clone)]
pub struct EmotionAccumulator {
    totals: Vec<f64>,
    sentences: usize,
    matches: usize,
}

impl EmotionAccumulator {
    pub fn new(lexicon: &LexiconStore) -> Self {
        Self {
            totals: vec![0.0; lexicon.len()],
            sentences: 0,
            matches: 0,
        }
    }

    pub fn absorb(&mut self, scores: &SentenceScores) {
        for (total, magnitude) in self.totals.iter_mut().zip(scores.magnitudes()) {
            *total += magnitude;
        }
        self.sentences += 1;
        self.matches += scores.matches();
    }

    pub fn finish(self) -> EmotionTotals {
        EmotionTotals {
            totals: self.totals,
            sentences: self.sentences,
            matches: self.matches,
        }
    }
}

/// Final, non-negative totals of a full-text analysis
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionTotals {
    totals: Vec<f64>,
    sentences: usize,
    matches: usize,
}

impl EmotionTotals {
    pub fn values(&self) -> &[f64] {
        &self.totals
    }

    pub fn sum(&self) -> f64 {
        self.totals.iter().sum()
    }

    pub fn sentences(&self) -> usize {
        self.sentences
    }

    pub fn matches(&self) -> usize {
        self.matches
    }
}

/// Scores sentences one by one while feeding the text-wide accumulator
pub struct EmotionScorer<'a> {
    lexicon: &'a LexiconStore,
    accumulator: EmotionAccumulator,
}

impl<'a> EmotionScorer<'a> {
    pub fn new(lexicon: &'a LexiconStore) -> Self {
        Self {
            lexicon,
            accumulator: EmotionAccumulator::new(lexicon),
        }
    }

    /// Score a sentence, add it to the running totals and return its own scores
    pub fn score(&mut self, tokens: &[Token]) -> SentenceScores {
        let scores = score_sentence(tokens, self.lexicon);
        self.accumulator.absorb(&scores);
        scores
    }

    pub fn finish(self) -> EmotionTotals {
        self.accumulator.finish()
    }
}
