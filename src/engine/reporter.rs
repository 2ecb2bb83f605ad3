//! Per-sentence reporting
//!
//! Works on a sentence's own [`SentenceScores`], never on the text-wide
//! totals, so a sentence's dominant emotion may be a category the full-text
//! distribution filtered out.

use super::scorer::SentenceScores;
use crate::lexicon::LexiconStore;
use crate::lexicon::NEUTRAL_KEY;
use crate::models::PolarityScale;
use crate::models::SentenceRecord;
use crate::models::SentimentLabel;
use crate::nlp::Polarity;
use crate::nlp::Token;

/// Added to the per-token emotion density
pub const CONFIDENCE_BOOST: f64 = 0.3;
/// Sentence confidence never reaches certainty
pub const CONFIDENCE_CEILING: f64 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct DominantEmotion {
    pub key: String,
    /// Absolute sentence score
    pub score: f64,
    /// The sentence is negated and this category was matched directly
    pub negated: bool,
}

impl DominantEmotion {
    pub fn neutral() -> Self {
        Self {
            key: NEUTRAL_KEY.to_string(),
            score: 0.0,
            negated: false,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.key == NEUTRAL_KEY
    }
}

/// Largest magnitude wins. Ties resolve to the category registered first
/// in the lexicon; only a strictly larger magnitude replaces the current
/// best while scanning in registration order.
pub fn dominant_emotion(scores: &SentenceScores, lexicon: &LexiconStore) -> DominantEmotion {
    let mut best: Option<(usize, f64)> = None;
    for (index, score) in scores.magnitudes().iter().enumerate() {
        if *score <= 0.0 {
            continue;
        }
        if best.map_or(true, |(_, b)| *score > b) {
            best = Some((index, *score));
        }
    }

    best.and_then(|(index, score)| {
        lexicon.category(index).map(|category| DominantEmotion {
            key: category.key.clone(),
            score,
            negated: scores.context().negated && scores.is_direct(index),
        })
    })
    .unwrap_or_else(DominantEmotion::neutral)
}

/// `min(|score| / tokens + boost, ceiling)`
pub fn emotion_confidence(dominant_score: f64, token_count: usize) -> f64 {
    let density = dominant_score.abs() / token_count.max(1) as f64;
    (density + CONFIDENCE_BOOST).min(CONFIDENCE_CEILING)
}

pub struct SentenceReporter<'a> {
    lexicon: &'a LexiconStore,
    scale: PolarityScale,
}

impl<'a> SentenceReporter<'a> {
    pub fn new(lexicon: &'a LexiconStore, scale: PolarityScale) -> Self {
        Self { lexicon, scale }
    }

    /// Package one sentence. `sentiment` is the delegated base signal for
    /// this sentence alone.
    pub fn report(
        &self,
        text: &str,
        tokens: &[Token],
        scores: &SentenceScores,
        sentiment: &Polarity,
    ) -> SentenceRecord {
        let token_count = tokens.iter().filter(|t| t.is_word()).count();
        let dominant = dominant_emotion(scores, self.lexicon);

        SentenceRecord {
            text: text.to_string(),
            sentiment: SentimentLabel::from_polarity(sentiment.value),
            polarity: self.scale.apply(sentiment.value),
            negated: dominant.negated,
            confidence: emotion_confidence(dominant.score, token_count),
            dominant_emotion: dominant.key,
            token_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scorer::score_sentence;
    use crate::engine::EmotionAccumulator;
    use crate::engine::Normalizer;

    fn lexicon() -> LexiconStore {
        LexiconStore::builder()
            .category("joy", "😊", "Happiness", &["happy"])
            .category("sadness", "😢", "Sorrow", &["sad"])
            .category("anger", "😠", "Anger", &["angry"])
            .negations(&["not"])
            .opposite("joy", "sadness")
            .build()
            .unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(w, w, "X", "dep")).collect()
    }

    #[test]
    fn test_largest_magnitude_wins() {
        let lexicon = lexicon();
        let scores = score_sentence(&tokens(&["sad", "angry", "angry"]), &lexicon);
        assert_eq!(dominant_emotion(&scores, &lexicon).key, "anger");
    }

    #[test]
    fn test_tie_breaks_by_registration_order() {
        let lexicon = lexicon();
        let scores = score_sentence(&tokens(&["angry", "sad"]), &lexicon);
        assert_eq!(dominant_emotion(&scores, &lexicon).key, "sadness");
        let scores = score_sentence(&tokens(&["angry", "happy"]), &lexicon);
        assert_eq!(dominant_emotion(&scores, &lexicon).key, "joy");
    }

    #[test]
    fn test_all_zero_is_neutral() {
        let lexicon = lexicon();
        let scores = score_sentence(&tokens(&["a", "plain", "table"]), &lexicon);
        let dominant = dominant_emotion(&scores, &lexicon);
        assert!(dominant.is_neutral());
        assert_eq!(dominant.score, 0.0);
    }

    #[test]
    fn test_negated_dominant() {
        let lexicon = lexicon();
        let scores = score_sentence(&tokens(&["not", "happy"]), &lexicon);
        let dominant = dominant_emotion(&scores, &lexicon);
        assert_eq!(dominant.key, "joy");
        assert!((dominant.score - 0.5).abs() < 1e-12);
        assert!(dominant.negated);
    }

    #[test]
    fn test_negated_dominant_with_opposite_credit() {
        let lexicon = lexicon();
        // joy 0.5 + 0.7, sadness 0.35 + 1.0
        let scores = score_sentence(&tokens(&["not", "happy", "sad", "sad"]), &lexicon);
        let dominant = dominant_emotion(&scores, &lexicon);
        assert_eq!(dominant.key, "sadness");
        assert!(dominant.negated);

        let lexicon = LexiconStore::builder()
            .category("joy", "😊", "Happiness", &["happy", "glad"])
            .category("sadness", "😢", "Sorrow", &["sad"])
            .negations(&["not"])
            .opposite("joy", "sadness")
            .build()
            .unwrap();
        let scores = score_sentence(&tokens(&["not", "happy", "glad"]), &lexicon);
        let dominant = dominant_emotion(&scores, &lexicon);
        assert_eq!(dominant.key, "joy");
        assert!(dominant.negated);
    }

    #[test]
    fn test_sentence_and_text_scope_agree_on_same_tokens() {
        let lexicon = lexicon();
        let words = tokens(&["i", "am", "not", "happy", "sad", "sad", "angry", "angry"]);
        let scores = score_sentence(&words, &lexicon);
        // sadness 1.35, joy 1.2, anger 1.0
        assert_eq!(dominant_emotion(&scores, &lexicon).key, "sadness");

        let mut accumulator = EmotionAccumulator::new(&lexicon);
        accumulator.absorb(&scores);
        let distribution = Normalizer::default().normalize(&accumulator.finish(), &lexicon);
        assert_eq!(distribution.dominant(), "sadness");
    }

    #[test]
    fn test_confidence_density_and_ceiling() {
        assert!((emotion_confidence(1.0, 4) - 0.55).abs() < 1e-12);
        assert!((emotion_confidence(-1.0, 4) - 0.55).abs() < 1e-12);
        assert_eq!(emotion_confidence(10.0, 1), CONFIDENCE_CEILING);
        assert_eq!(emotion_confidence(0.0, 5), CONFIDENCE_BOOST);
        // zero tokens do not divide by zero
        assert_eq!(emotion_confidence(1.0, 0), CONFIDENCE_CEILING);
    }

    #[test]
    fn test_report_uses_sentence_polarity() {
        let lexicon = lexicon();
        let words = tokens(&["i", "am", "happy"]);
        let scores = score_sentence(&words, &lexicon);
        let reporter = SentenceReporter::new(&lexicon, PolarityScale::Unit);
        let record = reporter.report(
            "I am happy",
            &words,
            &scores,
            &Polarity {
                value: 0.8,
                subjectivity: Some(1.0),
            },
        );
        assert_eq!(record.dominant_emotion, "joy");
        assert_eq!(record.sentiment, SentimentLabel::Positive);
        assert!((record.polarity - 0.9).abs() < 1e-12);
        assert_eq!(record.token_count, 3);
        assert!(!record.negated);
        assert!((record.confidence - (1.0 / 3.0 + 0.3)).abs() < 1e-12);
    }
}
