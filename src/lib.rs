//! Emotiscope: sentiment polarity and context-aware emotion scoring
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use emotiscope::lexicon::{LexiconProfile, LexiconStore};
//! use emotiscope::SentimentAnalyzer;
//!
//! let lexicon = Arc::new(LexiconStore::from_profile(LexiconProfile::Extended)?);
//! let analyzer = SentimentAnalyzer::new(lexicon);
//! let result = analyzer.analyze("I am absolutely thrilled and overjoyed!");
//! assert_eq!(result.dominant_emotion, "joy");
//! # Ok::<(), emotiscope::EmotiscopeError>(())
//! ```

pub mod analyzer;
pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod lexicon;
pub mod logging;
pub mod models;
pub mod nlp;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod errors_tests;

pub use analyzer::SentimentAnalyzer;
pub use config::AppConfig;
pub use engine::EmotionDistribution;
pub use errors::*;
pub use lexicon::LexiconStore;
pub use models::AnalysisResult;
pub use models::SentenceRecord;
pub use models::SentimentLabel;
