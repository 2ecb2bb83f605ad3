//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `emotiscope` CLI

use crate::lexicon::LexiconStore;
use crate::models::AnalysisResult;
use crate::AppConfig;

/// Width of the score bars in analysis output
const BAR_WIDTH: usize = 20;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8 characters (emojis, etc.)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

fn score_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Print a full analysis result
pub fn print_analysis(result: &AnalysisResult) {
    if let Some(error) = &result.error {
        print_warning(&format!("Degraded result: {error}"));
    }

    println!("📝 {}", truncate_str(&result.text.replace('\n', " "), 80));
    println!();
    print!(
        "💬 Sentiment: {} (polarity {:.3}",
        result.sentiment, result.polarity
    );
    match result.subjectivity {
        Some(subjectivity) => println!(", subjectivity {subjectivity:.3})"),
        None => println!(")"),
    }
    println!("🎯 Dominant emotion: {}", result.dominant_emotion);
    println!();

    println!("🎭 Emotions:");
    for (key, entry) in result.emotions.iter() {
        println!(
            "  {} {:<14} {} {:.1}%",
            entry.symbol,
            key,
            score_bar(entry.score),
            entry.score * 100.0
        );
    }

    if !result.key_phrases.is_empty() {
        println!();
        println!("🔑 Key phrases:");
        for phrase in &result.key_phrases {
            match &phrase.entity_type {
                Some(label) => println!("  - {} [{}]", phrase.text, label),
                None => println!("  - {}", phrase.text),
            }
        }
    }

    if !result.sentence_analysis.is_empty() {
        println!();
        println!("📄 Sentences:");
        for (index, sentence) in result.sentence_analysis.iter().enumerate() {
            println!(
                "  {}. {} | {} ({:.3}) | {}{} | confidence {:.2}",
                index + 1,
                truncate_str(&sentence.text, 60),
                sentence.sentiment,
                sentence.polarity,
                if sentence.negated { "not " } else { "" },
                sentence.dominant_emotion,
                sentence.confidence
            );
        }
    }
}

/// Print one line per batch result
pub fn print_batch_summary(results: &[AnalysisResult]) {
    println!("Analyzed {} texts:", results.len());
    for (index, result) in results.iter().enumerate() {
        println!(
            "  {:>4}. {:<8} {:>7.3}  {:<12} {}{}",
            index + 1,
            result.sentiment.as_str(),
            result.polarity,
            result.dominant_emotion,
            truncate_str(&result.text, 50),
            if result.is_degraded() { "  (degraded)" } else { "" }
        );
    }

    let degraded = results.iter().filter(|r| r.is_degraded()).count();
    if degraded > 0 {
        print_warning(&format!("{degraded} results used the fallback path"));
    }
}

/// Print the loaded lexicon
pub fn print_lexicon(lexicon: &LexiconStore, threshold: f64) {
    println!("📚 Emotion lexicon: {} categories", lexicon.len());
    println!();
    for category in lexicon.categories() {
        let opposite = lexicon
            .opposite_key(&category.key)
            .map(|key| format!(" ↔ {key}"))
            .unwrap_or_default();
        println!(
            "  {} {:<14} {:>3} triggers  {}{}",
            category.symbol,
            category.key,
            category.triggers.len(),
            category.description,
            opposite
        );
    }
    println!();

    let modifiers = lexicon.modifiers();
    let context = lexicon.context_words();
    println!("🔧 Modifiers:");
    println!("  Intensifiers: {}", modifiers.intensifier_count());
    println!("  Diminishers: {}", modifiers.diminisher_count());
    println!("  Negations: {}", context.negations().join(", "));
    println!("  Negated forms: {}", lexicon.negated_form_count());
    println!("  Conditionals: {}", context.conditionals().join(", "));
    println!();
    println!("📏 Significance threshold: {threshold}");
}

pub fn print_config(config: &AppConfig) {
    println!("📋 Emotiscope Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("⚙️  Engine:");
    println!("  Significance threshold: {}", config.significance_threshold());
    println!("  Polarity scale: {}", config.polarity_scale());
    println!("  Max key phrases: {}", config.max_key_phrases());
    println!();

    println!("📚 Lexicon:");
    match &config.lexicon.path {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  Profile: {}", config.lexicon_profile()),
    }
    println!();

    println!("🌐 Server:");
    println!("  Address: {}", config.server_addr());
    println!("  CORS: {}", config.cors_enabled());
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_utf8() {
        assert_eq!(truncate_str("😊😊😊", 2), "😊😊...");
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(score_bar(1.0).chars().filter(|c| *c == '█').count(), BAR_WIDTH);
        assert_eq!(score_bar(0.5).chars().count(), BAR_WIDTH);
        // out-of-range scores are clamped
        assert_eq!(score_bar(1.7).chars().count(), BAR_WIDTH);
    }
}
