//! Analysis orchestrator
//!
//! One `analyze` call runs `Validate → BaseSentiment → EmotionScoring (per
//! sentence) → Aggregate → KeyPhrases → Assemble`. Blank input short-circuits
//! to the canonical neutral result. Toolkit failures never escape: the call
//! drops to the toolkit-free [`PolarityEstimator`] and, if that fails too,
//! to the neutral result, with `error` set in both cases.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::info_span;
use tracing::warn;

use crate::config::default_max_key_phrases;
use crate::config::AppConfig;
use crate::engine::EmotionDistribution;
use crate::engine::EmotionScorer;
use crate::engine::Normalizer;
use crate::engine::SentenceReporter;
use crate::lexicon::LexiconStore;
use crate::models::AnalysisResult;
use crate::models::KeyPhrase;
use crate::models::PolarityScale;
use crate::models::SentenceRecord;
use crate::models::SentimentLabel;
use crate::nlp::preprocess::is_blank;
use crate::nlp::preprocess::is_stop_word;
use crate::nlp::preprocess::normalize_whitespace;
use crate::nlp::preprocess::preprocess_text;
use crate::nlp::AnnotatedSentence;
use crate::nlp::Document;
use crate::nlp::LexiconPolarity;
use crate::nlp::NlpToolkit;
use crate::nlp::Polarity;
use crate::nlp::PolarityEstimator;
use crate::nlp::RuleBasedToolkit;
use crate::nlp::Token;
use crate::Result;

/// Part-of-speech tag given to words scored without a toolkit
const UNTAGGED: &str = "X";

/// Sentiment and emotion analyzer
///
/// Cheap to share: the lexicon and delegates sit behind `Arc`, and every
/// call allocates its own context and accumulator.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<LexiconStore>,
    toolkit: Arc<dyn NlpToolkit>,
    fallback: Arc<dyn PolarityEstimator>,
    normalizer: Normalizer,
    scale: PolarityScale,
    max_key_phrases: usize,
}

impl SentimentAnalyzer {
    /// Analyzer backed by the rule-based toolkit, whose lemmatiser is taught
    /// every word of the lexicon
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        let toolkit = RuleBasedToolkit::new().with_vocabulary(lexicon.vocabulary());
        Self::with_toolkit(lexicon, Arc::new(toolkit))
    }

    pub fn with_toolkit(lexicon: Arc<LexiconStore>, toolkit: Arc<dyn NlpToolkit>) -> Self {
        Self {
            lexicon,
            toolkit,
            fallback: Arc::new(LexiconPolarity),
            normalizer: Normalizer::default(),
            scale: PolarityScale::default(),
            max_key_phrases: default_max_key_phrases(),
        }
    }

    /// Build lexicon and engine settings from configuration. Lexicon faults
    /// are returned here, before any text is analysed.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let lexicon = Arc::new(config.build_lexicon()?);
        Ok(Self::new(lexicon)
            .with_normalizer(Normalizer::new(config.significance_threshold())?)
            .with_scale(config.polarity_scale())
            .with_max_key_phrases(config.max_key_phrases()))
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn PolarityEstimator>) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: PolarityScale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_max_key_phrases(mut self, max_key_phrases: usize) -> Self {
        self.max_key_phrases = max_key_phrases;
        self
    }

    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn scale(&self) -> PolarityScale {
        self.scale
    }

    pub fn toolkit_name(&self) -> &str {
        self.toolkit.name()
    }

    /// Analyze one text. Never fails.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let span = info_span!("analyze", chars = text.chars().count());
        let _enter = span.enter();

        if is_blank(text) {
            debug!("Blank input, returning neutral result");
            return AnalysisResult::neutral(text, self.scale);
        }

        match self.analyze_with_toolkit(text) {
            Ok(result) => result,
            Err(toolkit_error) => {
                warn!(
                    toolkit = self.toolkit.name(),
                    error = %toolkit_error,
                    "NLP toolkit failed, falling back to lexicon polarity"
                );
                match self.analyze_without_toolkit(text) {
                    Ok(result) => result.with_error(toolkit_error.to_string()),
                    Err(fallback_error) => {
                        error!(
                            error = %fallback_error,
                            "Polarity fallback failed, returning neutral result"
                        );
                        AnalysisResult::neutral(text, self.scale)
                            .with_error(format!("{toolkit_error}; fallback: {fallback_error}"))
                    }
                }
            }
        }
    }

    /// Analyze texts independently in parallel; output order matches input
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        info!("Analyzing batch of {} texts", texts.len());
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    fn analyze_with_toolkit(&self, text: &str) -> Result<AnalysisResult> {
        let base = Polarity::from(self.toolkit.base_sentiment(text)?);
        let spans = self.toolkit.tokenize_sentences(text)?;

        let reporter = SentenceReporter::new(&self.lexicon, self.scale);
        let mut scorer = EmotionScorer::new(&self.lexicon);
        let mut sentences = Vec::with_capacity(spans.len());
        let mut records = Vec::with_capacity(spans.len());

        for span in spans {
            let tokens = self.toolkit.tokenize_words(&span.text)?;
            let scores = scorer.score(&tokens);
            let sentence_polarity = Polarity::from(self.toolkit.base_sentiment(&span.text)?);
            records.push(reporter.report(&span.text, &tokens, &scores, &sentence_polarity));
            sentences.push(AnnotatedSentence { span, tokens });
        }

        let emotions = self.aggregate(scorer);
        let key_phrases = self.key_phrases(&Document { sentences })?;
        Ok(self.assemble(text, base, emotions, key_phrases, records))
    }

    /// Lowest tier: estimator polarity, and every preprocessed word scored as
    /// one sentence with its surface form as lemma
    fn analyze_without_toolkit(&self, text: &str) -> Result<AnalysisResult> {
        let base = Polarity::from(self.fallback.estimate(text)?);
        let cleaned = preprocess_text(text);
        let tokens: Vec<Token> = cleaned
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| Token::new(word, word, UNTAGGED, "dep"))
            .collect();

        let mut scorer = EmotionScorer::new(&self.lexicon);
        scorer.score(&tokens);
        let emotions = self.aggregate(scorer);
        Ok(self.assemble(text, base, emotions, Vec::new(), Vec::new()))
    }

    fn aggregate(&self, scorer: EmotionScorer<'_>) -> EmotionDistribution {
        let totals = scorer.finish();
        let emotions = self.normalizer.normalize(&totals, &self.lexicon);
        if emotions.is_neutral() {
            debug!(
                sentences = totals.sentences(),
                matches = totals.matches(),
                "No significant emotional content found"
            );
        }
        emotions
    }

    /// Entities first, then noun chunks; de-duplicated case-insensitively,
    /// stop-word-only phrases dropped, capped at `max_key_phrases`
    fn key_phrases(&self, document: &Document) -> Result<Vec<KeyPhrase>> {
        let entities = self.toolkit.named_entities(document)?;
        let chunks = self.toolkit.noun_chunks(document)?;

        let mut seen = HashSet::new();
        let mut phrases = Vec::new();
        for span in entities.into_iter().chain(chunks) {
            if phrases.len() >= self.max_key_phrases {
                break;
            }
            let text = normalize_whitespace(&span.text);
            let key = text.to_lowercase();
            if key.is_empty() || key.split(' ').all(is_stop_word) {
                continue;
            }
            if seen.insert(key) {
                phrases.push(KeyPhrase {
                    text,
                    entity_type: span.label,
                });
            }
        }
        Ok(phrases)
    }

    fn assemble(
        &self,
        text: &str,
        base: Polarity,
        emotions: EmotionDistribution,
        key_phrases: Vec<KeyPhrase>,
        sentence_analysis: Vec<SentenceRecord>,
    ) -> AnalysisResult {
        AnalysisResult {
            text: text.to_string(),
            sentiment: SentimentLabel::from_polarity(base.value),
            polarity: self.scale.apply(base.value),
            subjectivity: base.subjectivity,
            dominant_emotion: emotions.dominant().to_string(),
            emotions,
            key_phrases,
            sentence_analysis,
            error: None,
        }
    }
}
