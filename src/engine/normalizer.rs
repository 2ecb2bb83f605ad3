//! Normalize, filter, renormalize
//!
//! Totals are turned into a distribution, categories under the significance
//! threshold are dropped, and the survivors are rescaled so the output sums
//! to 1.0 again. When nothing survives the result is the neutral singleton.

use serde::ser::SerializeMap;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;

use super::scorer::EmotionTotals;
use crate::errors::EmotiscopeError;
use crate::lexicon::LexiconStore;
use crate::lexicon::NEUTRAL_DESCRIPTION;
use crate::lexicon::NEUTRAL_KEY;
use crate::lexicon::NEUTRAL_SYMBOL;
use crate::Result;

/// Minimum normalized share a category needs to stay in the distribution.
/// Shared by every lexicon profile; override through `[engine]` config.
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub score: f64,
    pub symbol: String,
    pub description: String,
}

/// Category key → entry, in lexicon registration order
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionDistribution {
    entries: Vec<(String, EmotionEntry)>,
}

impl EmotionDistribution {
    /// `{neutral: 1.0}`
    pub fn neutral() -> Self {
        Self {
            entries: vec![(
                NEUTRAL_KEY.to_string(),
                EmotionEntry {
                    score: 1.0,
                    symbol: NEUTRAL_SYMBOL.to_string(),
                    description: NEUTRAL_DESCRIPTION.to_string(),
                },
            )],
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.entries.len() == 1 && self.entries[0].0 == NEUTRAL_KEY
    }

    pub fn get(&self, key: &str) -> Option<&EmotionEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Score of a category, 0.0 when it was filtered out
    pub fn score(&self, key: &str) -> f64 {
        self.get(key).map_or(0.0, |entry| entry.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmotionEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, e)| e.score).sum()
    }

    /// Highest-scoring key; ties go to the earliest registered category
    pub fn dominant(&self) -> &str {
        let mut best: Option<&(String, EmotionEntry)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1.score > b.1.score) {
                best = Some(entry);
            }
        }
        best.map_or(NEUTRAL_KEY, |(key, _)| key.as_str())
    }
}

impl Serialize for EmotionDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    threshold: f64,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
        }
    }
}

impl Normalizer {
    pub fn new(threshold: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&threshold) {
            return Err(EmotiscopeError::ConfigError(format!(
                "significance threshold must be in [0, 1), got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn normalize(&self, totals: &EmotionTotals, lexicon: &LexiconStore) -> EmotionDistribution {
        let total = totals.sum();
        if total <= 0.0 {
            return EmotionDistribution::neutral();
        }

        let survivors: Vec<(usize, f64)> = totals
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| (index, value / total))
            .filter(|(_, share)| *share > 0.0 && *share >= self.threshold)
            .collect();

        let kept: f64 = survivors.iter().map(|(_, share)| share).sum();
        if survivors.is_empty() || kept <= 0.0 {
            return EmotionDistribution::neutral();
        }

        let entries = survivors
            .into_iter()
            .filter_map(|(index, share)| {
                lexicon.category(index).map(|category| {
                    (
                        category.key.clone(),
                        EmotionEntry {
                            score: share / kept,
                            symbol: category.symbol.clone(),
                            description: category.description.clone(),
                        },
                    )
                })
            })
            .collect();

        EmotionDistribution { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scorer::EmotionScorer;
    use crate::nlp::Token;

    fn lexicon() -> LexiconStore {
        LexiconStore::builder()
            .category("joy", "😊", "Happiness", &["happy"])
            .category("sadness", "😢", "Sorrow", &["sad"])
            .category("anger", "😠", "Anger", &["angry"])
            .intensifiers(&["very"])
            .build()
            .unwrap()
    }

    fn totals(lexicon: &LexiconStore, sentences: &[&[&str]]) -> EmotionTotals {
        let mut scorer = EmotionScorer::new(lexicon);
        for words in sentences {
            let tokens: Vec<Token> = words.iter().map(|w| Token::new(w, w, "X", "dep")).collect();
            scorer.score(&tokens);
        }
        scorer.finish()
    }

    #[test]
    fn test_zero_total_is_neutral() {
        let lexicon = lexicon();
        let dist = Normalizer::default().normalize(&totals(&lexicon, &[&["plain"]]), &lexicon);
        assert!(dist.is_neutral());
        assert_eq!(dist.score("neutral"), 1.0);
        assert_eq!(dist.dominant(), "neutral");
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let lexicon = lexicon();
        let dist = Normalizer::default().normalize(
            &totals(&lexicon, &[&["very", "happy"], &["sad"], &["angry", "angry"]]),
            &lexicon,
        );
        assert!((dist.total() - 1.0).abs() < 1e-9);
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.dominant(), "anger");
    }

    #[test]
    fn test_filter_then_renormalize() {
        let lexicon = lexicon();
        // joy 20, sadness 1 → sadness share ≈ 0.047 < 0.05
        let happy: Vec<&str> = std::iter::repeat("happy").take(20).collect();
        let dist = Normalizer::default()
            .normalize(&totals(&lexicon, &[happy.as_slice(), &["sad"]]), &lexicon);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.score("joy"), 1.0);
        assert!(dist.get("sadness").is_none());
    }

    #[test]
    fn test_everything_filtered_falls_back_to_neutral() {
        let lexicon = lexicon();
        let normalizer = Normalizer::new(0.5).unwrap();
        let dist = normalizer.normalize(&totals(&lexicon, &[&["happy", "sad", "angry"]]), &lexicon);
        assert!(dist.is_neutral());
    }

    #[test]
    fn test_zero_categories_never_appear() {
        let lexicon = lexicon();
        let normalizer = Normalizer::new(0.0).unwrap();
        let dist = normalizer.normalize(&totals(&lexicon, &[&["happy"]]), &lexicon);
        assert_eq!(dist.keys().collect::<Vec<_>>(), vec!["joy"]);
    }

    #[test]
    fn test_metadata_is_populated() {
        let lexicon = lexicon();
        let dist = Normalizer::default().normalize(&totals(&lexicon, &[&["sad"]]), &lexicon);
        let entry = dist.get("sadness").unwrap();
        assert_eq!(entry.symbol, "😢");
        assert_eq!(entry.description, "Sorrow");
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let lexicon = lexicon();
        let dist = Normalizer::default().normalize(&totals(&lexicon, &[&["angry", "happy"]]), &lexicon);
        assert_eq!(dist.dominant(), "joy");
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Normalizer::new(1.0).is_err());
        assert!(Normalizer::new(-0.1).is_err());
        assert_eq!(Normalizer::new(0.1).unwrap().threshold(), 0.1);
    }

    #[test]
    fn test_serializes_in_registration_order() {
        let lexicon = lexicon();
        let dist = Normalizer::default()
            .normalize(&totals(&lexicon, &[&["angry", "sad", "happy"]]), &lexicon);
        let json = serde_json::to_string(&dist).unwrap();
        let joy = json.find("\"joy\"").unwrap();
        let sadness = json.find("\"sadness\"").unwrap();
        let anger = json.find("\"anger\"").unwrap();
        assert!(joy < sadness && sadness < anger);
    }
}
