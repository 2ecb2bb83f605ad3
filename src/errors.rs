use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmotiscopeError {
    /// Lexicon construction fault; fatal at startup
    #[error("Malformed lexicon: {0}")]
    MalformedLexicon(String),

    /// A delegated NLP component failed to load or raised during a call
    #[error("NLP delegate unavailable: {0}")]
    DelegateUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl EmotiscopeError {
    /// Shorthand used by toolkit implementations
    pub fn delegate(message: impl Into<String>) -> Self {
        Self::DelegateUnavailable(message.into())
    }

    /// Whether this error is a configuration-time fault that must stop the process
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedLexicon(_) | Self::ConfigError(_))
    }
}

pub type Result<T> = std::result::Result<T, EmotiscopeError>;
