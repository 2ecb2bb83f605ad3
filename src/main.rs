use std::sync::Arc;

use clap::Parser;
use emotiscope::cli;
use emotiscope::cli::Cli;
use emotiscope::cli::Commands;
use emotiscope::AppConfig;
use emotiscope::Result;
use emotiscope::SentimentAnalyzer;
use tracing::error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    if args.verbose {
        emotiscope::logging::init_logging_with_level("debug")?;
    } else {
        emotiscope::logging::init_logging_with_config(Some(&config))?;
    }
    info!("Configuration loaded successfully");

    if let Commands::Config = args.command {
        cli::handle_config_command(&config);
        return Ok(());
    }

    // Lexicon faults are fatal here, before any text is analysed
    let analyzer = match SentimentAnalyzer::from_config(&config) {
        Ok(analyzer) => Arc::new(analyzer),
        Err(e) => {
            error!("Failed to initialize analyzer: {}", e);
            cli::print_error(&format!("Failed to initialize analyzer: {e}"));
            return Err(e);
        }
    };

    // Execute the requested command
    match args.command {
        Commands::Analyze { text, file, json } => {
            cli::handle_analyze_command(&analyzer, text, file, json)?;
        }
        Commands::Batch { file, json } => {
            cli::handle_batch_command(&analyzer, &file, json)?;
        }
        Commands::Lexicon => {
            cli::handle_lexicon_command(&analyzer);
        }
        Commands::Config => {
            cli::handle_config_command(&config);
        }
        Commands::Serve { host, port, cors } => {
            cli::handle_serve_command(&config, analyzer, host, port, cors).await?;
        }
    }

    Ok(())
}
