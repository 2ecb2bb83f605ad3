use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::engine::DEFAULT_SIGNIFICANCE_THRESHOLD;
use crate::errors::EmotiscopeError;
use crate::lexicon::LexiconProfile;
use crate::lexicon::LexiconStore;
use crate::models::PolarityScale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum normalized share an emotion needs to be reported
    #[serde(default = "default_significance_threshold")]
    pub significance_threshold: f64,
    #[serde(default)]
    pub polarity_scale: PolarityScale,
    #[serde(default = "default_max_key_phrases")]
    pub max_key_phrases: usize,
}

fn default_significance_threshold() -> f64 {
    DEFAULT_SIGNIFICANCE_THRESHOLD
}

pub(crate) fn default_max_key_phrases() -> usize {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            significance_threshold: default_significance_threshold(),
            polarity_scale: PolarityScale::default(),
            max_key_phrases: default_max_key_phrases(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub profile: LexiconProfile,
    /// TOML lexicon file; replaces the built-in profile when set
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_enable_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default config file path
    pub fn load() -> crate::Result<Self> {
        // Try config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            warn!("Using config.example.toml. Create config.toml for production use.");
            Self::from_file("config.example.toml")
        } else {
            warn!("No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        let threshold = self.engine.significance_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return Err(EmotiscopeError::ConfigError(format!(
                "engine.significance_threshold must be in [0, 1), got {threshold}"
            )));
        }
        if self.engine.max_key_phrases == 0 {
            return Err(EmotiscopeError::ConfigError(
                "engine.max_key_phrases must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(EmotiscopeError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the configured lexicon: the file when `lexicon.path` is set,
    /// otherwise the built-in profile
    pub fn build_lexicon(&self) -> crate::Result<LexiconStore> {
        match &self.lexicon.path {
            Some(path) => LexiconStore::from_file(path),
            None => LexiconStore::from_profile(self.lexicon.profile),
        }
    }

    /// Get significance threshold
    pub fn significance_threshold(&self) -> f64 {
        self.engine.significance_threshold
    }

    /// Get polarity scale
    pub fn polarity_scale(&self) -> PolarityScale {
        self.engine.polarity_scale
    }

    /// Get maximum key phrases per result
    pub fn max_key_phrases(&self) -> usize {
        self.engine.max_key_phrases
    }

    /// Get lexicon profile
    pub fn lexicon_profile(&self) -> LexiconProfile {
        self.lexicon.profile
    }

    /// Get server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Check if CORS is enabled
    pub fn cors_enabled(&self) -> bool {
        self.server.enable_cors
    }
}
