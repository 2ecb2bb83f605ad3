//! API server handlers

use std::sync::Arc;

use crate::api::serve_api;
use crate::AppConfig;
use crate::Result;
use crate::SentimentAnalyzer;

pub async fn handle_serve_command(
    config: &AppConfig,
    analyzer: Arc<SentimentAnalyzer>,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
) -> Result<()> {
    // CLI arguments take priority over config
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let cors = cors || config.cors_enabled();

    println!("🚀 Starting Emotiscope API Server");
    println!("=================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    println!(
        "📚 Lexicon: {} categories, toolkit: {}",
        analyzer.lexicon().len(),
        analyzer.toolkit_name()
    );
    println!();

    serve_api(analyzer, host, port, cors).await
}
