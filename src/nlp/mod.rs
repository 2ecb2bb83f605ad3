//! NLP toolkit interface
//!
//! The emotion engine treats tokenisation, tagging, phrase extraction and
//! base polarity as a black box behind [`NlpToolkit`]. Any implementation
//! may fail with [`EmotiscopeError::DelegateUnavailable`]; the analyzer
//! recovers from that through a [`PolarityEstimator`].
//!
//! [`EmotiscopeError::DelegateUnavailable`]: crate::errors::EmotiscopeError::DelegateUnavailable

pub mod polarity;
pub mod preprocess;
pub mod rule_based;

use serde::Deserialize;
use serde::Serialize;

use crate::models::SentimentLabel;
use crate::Result;

pub use polarity::LexiconPolarity;
pub use rule_based::RuleBasedToolkit;

/// A sentence span within the analysed text (byte offsets)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// One token with its annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as written
    pub text: String,
    /// Lowercased surface text
    pub lower: String,
    pub lemma: String,
    /// Universal part-of-speech tag
    pub pos: String,
    /// Dependency label
    pub dep: String,
}

impl Token {
    pub fn new(text: &str, lemma: &str, pos: &str, dep: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            lemma: lemma.to_lowercase(),
            pos: pos.to_string(),
            dep: dep.to_string(),
        }
    }

    /// Punctuation and symbols do not count as words
    pub fn is_word(&self) -> bool {
        self.pos != "PUNCT" && self.pos != "SYM"
    }
}

/// A sentence together with its tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSentence {
    pub span: SentenceSpan,
    pub tokens: Vec<Token>,
}

/// Tokenised text handed back to the toolkit for phrase extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sentences: Vec<AnnotatedSentence>,
}

/// Noun chunk or named entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSpan {
    pub text: String,
    pub label: Option<String>,
}

/// The two shapes base-sentiment models report in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseSentiment {
    /// Classifier style: a label with its confidence
    Labeled { label: SentimentLabel, score: f64 },
    /// TextBlob style: polarity in [-1, 1], subjectivity in [0, 1]
    Blob { polarity: f64, subjectivity: f64 },
}

/// Common internal representation of base sentiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity {
    /// Signed, in [-1, 1]
    pub value: f64,
    pub subjectivity: Option<f64>,
}

impl Polarity {
    pub const fn neutral() -> Self {
        Self {
            value: 0.0,
            subjectivity: None,
        }
    }
}

impl From<BaseSentiment> for Polarity {
    fn from(base: BaseSentiment) -> Self {
        match base {
            BaseSentiment::Labeled { label, score } => {
                let magnitude = finite_or_zero(score).abs().min(1.0);
                let value = match label {
                    SentimentLabel::Positive => magnitude,
                    SentimentLabel::Negative => -magnitude,
                    SentimentLabel::Neutral => 0.0,
                };
                Self {
                    value,
                    subjectivity: None,
                }
            }
            BaseSentiment::Blob {
                polarity,
                subjectivity,
            } => Self {
                value: finite_or_zero(polarity).clamp(-1.0, 1.0),
                subjectivity: Some(finite_or_zero(subjectivity).clamp(0.0, 1.0)),
            },
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Delegated NLP toolkit
pub trait NlpToolkit: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    fn tokenize_sentences(&self, text: &str) -> Result<Vec<SentenceSpan>>;

    fn tokenize_words(&self, sentence: &str) -> Result<Vec<Token>>;

    fn base_sentiment(&self, text: &str) -> Result<BaseSentiment>;

    fn noun_chunks(&self, doc: &Document) -> Result<Vec<PhraseSpan>>;

    fn named_entities(&self, doc: &Document) -> Result<Vec<PhraseSpan>>;
}

/// Toolkit-free polarity estimation, the lowest fallback tier
pub trait PolarityEstimator: Send + Sync {
    fn estimate(&self, text: &str) -> Result<BaseSentiment>;
}
