//! Information display handlers (lexicon, config)

use crate::cli::output::*;
use crate::AppConfig;
use crate::SentimentAnalyzer;

pub fn handle_lexicon_command(analyzer: &SentimentAnalyzer) {
    print_lexicon(analyzer.lexicon(), analyzer.normalizer().threshold());
}

pub fn handle_config_command(config: &AppConfig) {
    print_config(config);
}
