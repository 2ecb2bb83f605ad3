//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "emotiscope")]
#[command(about = "Sentiment polarity and emotion scoring for free-form text")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: level from config)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one text (argument, file, or stdin)
    Analyze {
        /// Text to analyze; read from stdin when neither TEXT nor --file is given
        text: Option<String>,
        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze every non-empty line of a file
    Batch {
        /// File with one text per line
        file: PathBuf,
        /// Print the results as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show the loaded emotion lexicon
    Lexicon,
    /// Show current configuration
    Config,
    /// Start the HTTP API server
    Serve {
        /// Host to bind (default: from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable CORS even if disabled in config
        #[arg(long)]
        cors: bool,
    },
}
