//! Word-level polarity lexicon
//!
//! Backs both the rule-based toolkit's base sentiment and the toolkit-free
//! fallback tier. Scores are averaged over matched words; a negation within
//! the two preceding words flips and halves a word's polarity, a preceding
//! booster scales it up.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;

use super::preprocess::preprocess_text;
use super::BaseSentiment;
use super::PolarityEstimator;
use crate::Result;

// Load polarity lexicon at compile time
const POLARITY_LEXICON: &str = include_str!("../../data/polarity.tsv");

/// Polarity multiplier for a negated word
const NEGATION_SCALAR: f64 = -0.5;
/// Polarity multiplier after a booster word
const BOOSTER_SCALAR: f64 = 1.3;
/// How many preceding words a negation reaches
const NEGATION_WINDOW: usize = 2;

const NEGATIONS: &[&str] = &[
    "not", "n't", "no", "never", "cannot", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent",
    "werent", "cant", "wont", "couldnt", "wouldnt", "shouldnt", "aint", "hardly",
];

const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "absolutely",
    "so",
    "totally",
    "incredibly",
    "truly",
    "completely",
    "utterly",
    "deeply",
    "highly",
    "super",
    "quite",
    "too",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordPolarity {
    pub polarity: f64,
    pub subjectivity: f64,
}

lazy_static! {
    /// Word → polarity/subjectivity
    static ref POLARITY_SCORES: HashMap<String, WordPolarity> = {
        let mut map = HashMap::new();
        for line in POLARITY_LEXICON.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            if let (Some(word), Some(polarity), Some(subjectivity)) =
                (fields.next(), fields.next(), fields.next())
            {
                if let (Ok(polarity), Ok(subjectivity)) =
                    (polarity.trim().parse::<f64>(), subjectivity.trim().parse::<f64>())
                {
                    map.insert(
                        word.trim().to_lowercase(),
                        WordPolarity {
                            polarity,
                            subjectivity,
                        },
                    );
                }
            }
        }
        map
    };
}

pub fn lookup(word: &str) -> Option<WordPolarity> {
    POLARITY_SCORES.get(word).copied()
}

/// Every word in the polarity lexicon
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    POLARITY_SCORES.keys().map(String::as_str)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

pub fn is_booster(word: &str) -> bool {
    BOOSTERS.contains(&word)
}

/// Average polarity and subjectivity over lowercase words
pub fn score_words<S: AsRef<str>>(words: &[S]) -> BaseSentiment {
    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut matched = 0usize;

    for (index, word) in words.iter().enumerate() {
        let Some(entry) = lookup(word.as_ref()) else {
            continue;
        };

        let mut polarity = entry.polarity;
        let mut subjectivity = entry.subjectivity;

        if index > 0 && is_booster(words[index - 1].as_ref()) {
            polarity *= BOOSTER_SCALAR;
            subjectivity *= BOOSTER_SCALAR;
        }

        let window_start = index.saturating_sub(NEGATION_WINDOW);
        if words[window_start..index]
            .iter()
            .any(|w| is_negation(w.as_ref()))
        {
            polarity *= NEGATION_SCALAR;
        }

        polarity_sum += polarity.clamp(-1.0, 1.0);
        subjectivity_sum += subjectivity.clamp(0.0, 1.0);
        matched += 1;
    }

    if matched == 0 {
        return BaseSentiment::Blob {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    BaseSentiment::Blob {
        polarity: polarity_sum / matched as f64,
        subjectivity: subjectivity_sum / matched as f64,
    }
}

/// Toolkit-free polarity over preprocessed text
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarity;

impl PolarityEstimator for LexiconPolarity {
    fn estimate(&self, text: &str) -> Result<BaseSentiment> {
        let cleaned = preprocess_text(text);
        let words: Vec<&str> = cleaned.split(' ').filter(|w| !w.is_empty()).collect();
        let sentiment = score_words(&words);
        debug!(words = words.len(), ?sentiment, "Estimated polarity without toolkit");
        Ok(sentiment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(words: &[&str]) -> (f64, f64) {
        match score_words(words) {
            BaseSentiment::Blob {
                polarity,
                subjectivity,
            } => (polarity, subjectivity),
            BaseSentiment::Labeled { .. } => unreachable!(),
        }
    }

    #[test]
    fn test_lexicon_loads() {
        assert!(POLARITY_SCORES.len() > 150);
        assert_eq!(lookup("happy").unwrap().polarity, 0.8);
        assert!(lookup("table").is_none());
    }

    #[test]
    fn test_average() {
        let (p, s) = polarity(&["good", "and", "bad"]);
        assert!(p.abs() < 1e-9);
        assert!(s > 0.0);
    }

    #[test]
    fn test_negation_window() {
        let (p, _) = polarity(&["not", "happy"]);
        assert!((p + 0.4).abs() < 1e-9);
        let (p, _) = polarity(&["not", "very", "happy"]);
        assert!(p < 0.0);
        let (p, _) = polarity(&["not", "that", "i", "am", "happy"]);
        assert!(p > 0.0);
    }

    #[test]
    fn test_booster_is_clamped() {
        let (p, s) = polarity(&["very", "wonderful"]);
        assert_eq!(p, 1.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_no_matches_is_neutral() {
        assert_eq!(polarity(&["the", "table"]), (0.0, 0.0));
        assert_eq!(polarity(&[] as &[&str]), (0.0, 0.0));
    }

    #[test]
    fn test_estimator_preprocesses() {
        let estimate = LexiconPolarity.estimate("I DON'T feel happy!!!").unwrap();
        match estimate {
            BaseSentiment::Blob { polarity, .. } => assert!(polarity < 0.0),
            BaseSentiment::Labeled { .. } => panic!("unexpected shape"),
        }
    }
}
