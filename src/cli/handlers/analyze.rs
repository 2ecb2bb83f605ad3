//! Analysis handlers (single text and batch)

use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;

use crate::cli::output::*;
use crate::EmotiscopeError;
use crate::Result;
use crate::SentimentAnalyzer;

pub fn handle_analyze_command(
    analyzer: &SentimentAnalyzer,
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let text = read_input(text, file.as_deref())?;
    let result = analyzer.analyze(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_analysis(&result);
    }
    Ok(())
}

pub fn handle_batch_command(analyzer: &SentimentAnalyzer, file: &Path, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let texts = batch_lines(&content);
    if texts.is_empty() {
        print_warning(&format!("No text found in {}", file.display()));
        return Ok(());
    }

    info!("Analyzing {} lines from {}", texts.len(), file.display());
    if !json {
        print_info(&format!("Analyzing {} texts from {}", texts.len(), file.display()));
    }
    let results = analyzer.analyze_batch(&texts);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_batch_summary(&results);
    }
    Ok(())
}

/// Positional text, then file, then stdin
fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => Err(EmotiscopeError::InvalidInput(
            "pass either TEXT or --file, not both".to_string(),
        )),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn batch_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
