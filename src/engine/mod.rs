//! Emotion engine
//!
//! Pipeline, leaves first:
//! - `context`: per-sentence negation / intensity / conditional state
//! - `scorer`: trigger matching, sign flips, opposite redistribution
//! - `normalizer`: text-wide distribution with significance filtering
//! - `reporter`: per-sentence dominant emotion and confidence

pub mod context;
pub mod normalizer;
pub mod reporter;
pub mod scorer;

pub use context::ContextState;
pub use normalizer::EmotionDistribution;
pub use normalizer::EmotionEntry;
pub use normalizer::Normalizer;
pub use normalizer::DEFAULT_SIGNIFICANCE_THRESHOLD;
pub use reporter::dominant_emotion;
pub use reporter::DominantEmotion;
pub use reporter::SentenceReporter;
pub use scorer::score_sentence;
pub use scorer::EmotionAccumulator;
pub use scorer::EmotionScorer;
pub use scorer::EmotionTotals;
pub use scorer::SentenceScores;
