use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::EmotionDistribution;
use crate::lexicon::NEUTRAL_KEY;

/// Sentiment label derived from polarity sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// `> 0` positive, `< 0` negative, otherwise neutral. Expects a signed polarity.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range reported polarities are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolarityScale {
    /// [-1, 1], neutral at 0.0
    #[default]
    Signed,
    /// [0, 1], neutral at 0.5
    Unit,
}

impl PolarityScale {
    /// Map an internal signed polarity onto this scale
    pub fn apply(&self, signed: f64) -> f64 {
        let signed = signed.clamp(-1.0, 1.0);
        match self {
            PolarityScale::Signed => signed,
            PolarityScale::Unit => (signed + 1.0) / 2.0,
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.apply(0.0)
    }
}

impl fmt::Display for PolarityScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarityScale::Signed => write!(f, "signed [-1, 1]"),
            PolarityScale::Unit => write!(f, "unit [0, 1]"),
        }
    }
}

/// A salient phrase, de-duplicated case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPhrase {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// Per-sentence breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub dominant_emotion: String,
    pub confidence: f64,
    /// The dominant emotion was matched under negation
    pub negated: bool,
    pub token_count: usize,
}

/// Full result of one `analyze` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjectivity: Option<f64>,
    pub emotions: EmotionDistribution,
    pub dominant_emotion: String,
    pub key_phrases: Vec<KeyPhrase>,
    pub sentence_analysis: Vec<SentenceRecord>,
    /// Set when a delegate failed and a fallback tier produced this result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Canonical result for empty input or total failure
    pub fn neutral(text: &str, scale: PolarityScale) -> Self {
        Self {
            text: text.to_string(),
            sentiment: SentimentLabel::Neutral,
            polarity: scale.midpoint(),
            subjectivity: None,
            emotions: EmotionDistribution::neutral(),
            dominant_emotion: NEUTRAL_KEY.to_string(),
            key_phrases: Vec::new(),
            sentence_analysis: Vec::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_polarity() {
        assert_eq!(SentimentLabel::from_polarity(0.3), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.01), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_polarity_scales() {
        assert_eq!(PolarityScale::Signed.apply(-0.4), -0.4);
        assert_eq!(PolarityScale::Unit.apply(-1.0), 0.0);
        assert_eq!(PolarityScale::Unit.apply(1.0), 1.0);
        assert_eq!(PolarityScale::Unit.midpoint(), 0.5);
        assert_eq!(PolarityScale::Signed.midpoint(), 0.0);
        // out-of-range delegate output is clamped
        assert_eq!(PolarityScale::Signed.apply(3.0), 1.0);
    }

    #[test]
    fn test_neutral_result_shape() {
        let result = AnalysisResult::neutral("", PolarityScale::Signed);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["polarity"], 0.0);
        assert_eq!(json["emotions"]["neutral"]["score"], 1.0);
        assert_eq!(json["key_phrases"].as_array().unwrap().len(), 0);
        assert_eq!(json["sentence_analysis"].as_array().unwrap().len(), 0);
        assert!(json.get("error").is_none());
        assert!(json.get("subjectivity").is_none());
    }

    #[test]
    fn test_with_error() {
        let result = AnalysisResult::neutral("x", PolarityScale::Unit).with_error("tagger down");
        assert!(result.is_degraded());
        assert_eq!(result.polarity, 0.5);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        let scale: PolarityScale = serde_json::from_str("\"unit\"").unwrap();
        assert_eq!(scale, PolarityScale::Unit);
    }
}
