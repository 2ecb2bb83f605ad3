//! Logging configuration for Emotiscope

use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::AppConfig;
use crate::Result;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "emotiscope.log";

/// Initialize logging system with file output
pub fn init_logging() -> Result<()> {
    init_logging_with_config(None)
}

/// Initialize logging with configuration
pub fn init_logging_with_config(config: Option<&AppConfig>) -> Result<()> {
    let (env_filter, level) = match config {
        Some(config) => (level_filter(&config.logging.level), config.logging.level.as_str()),
        // Fallback to RUST_LOG or default
        None => (
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,emotiscope=debug")),
            "info",
        ),
    };
    install(env_filter, level)
}

/// Initialize logging with custom log level
pub fn init_logging_with_level(level: &str) -> Result<()> {
    install(level_filter(level), level)
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},emotiscope={level}"))
}

fn install(env_filter: EnvFilter, level: &str) -> Result<()> {
    let logs_dir = Path::new(LOG_DIR);
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir)?;
    }

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false); // No colors in file

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::EmotiscopeError::Custom(format!("logging already initialized: {e}")))?;

    tracing::info!("Logging initialized with level: {level} - console and file output enabled");
    tracing::info!("Log files will be saved to: {LOG_DIR}/{LOG_FILE}.YYYY-MM-DD");

    // The writer flushes until the process exits
    std::mem::forget(guard);

    Ok(())
}

/// Initialize simple console logging for tests and one-shot commands
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| crate::EmotiscopeError::Custom(format!("logging already initialized: {e}")))?;

    tracing::info!("Simple logging initialized");
    Ok(())
}
