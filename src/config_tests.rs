//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::*;
    use crate::errors::EmotiscopeError;
    use crate::lexicon::LexiconProfile;
    use crate::models::PolarityScale;

    // ====== Default Value Tests ======

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.significance_threshold(), 0.05);
        assert_eq!(config.polarity_scale(), PolarityScale::Signed);
        assert_eq!(config.max_key_phrases(), 10);
        assert_eq!(config.lexicon_profile(), LexiconProfile::Extended);
        assert!(config.lexicon.path.is_none());
        assert_eq!(config.server_addr(), "127.0.0.1:5000");
        assert!(config.cors_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            backtrace: true,
        };

        assert_eq!(config.level, "debug");
        assert!(config.backtrace);
        assert_eq!(LoggingConfig::default().level, "info");
    }

    // ====== Parsing Tests ======

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.significance_threshold(), 0.05);
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [engine]
            polarity_scale = "unit"

            [lexicon]
            profile = "core"
            "#,
        )
        .unwrap();

        assert_eq!(config.polarity_scale(), PolarityScale::Unit);
        assert_eq!(config.lexicon_profile(), LexiconProfile::Core);
        // untouched keys keep their defaults
        assert_eq!(config.max_key_phrases(), 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let err = AppConfig::from_toml_str("[lexicon]\nprofile = \"huge\"").unwrap_err();
        assert!(matches!(err, EmotiscopeError::TomlParsing(_)));
    }

    #[test]
    fn test_example_config_parses() {
        let config = AppConfig::from_toml_str(include_str!("../config.example.toml")).unwrap();
        assert_eq!(config.lexicon_profile(), LexiconProfile::Extended);
        assert_eq!(config.polarity_scale(), PolarityScale::Signed);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080\nenable_cors = false").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.cors_enabled());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_file("/nonexistent/emotiscope.toml").unwrap_err();
        assert!(matches!(err, EmotiscopeError::Io(_)));
    }

    // ====== Validation Tests ======

    #[test]
    fn test_threshold_out_of_range() {
        for threshold in ["1.0", "-0.01", "2.5"] {
            let toml = format!("[engine]\nsignificance_threshold = {threshold}");
            let err = AppConfig::from_toml_str(&toml).unwrap_err();
            assert!(matches!(err, EmotiscopeError::ConfigError(_)));
            assert!(err.is_fatal());
        }
    }

    #[test]
    fn test_zero_key_phrases_rejected() {
        let mut config = AppConfig::default();
        config.engine.max_key_phrases = 0;
        assert!(config.validate().is_err());
    }

    // ====== Lexicon Selection Tests ======

    #[test]
    fn test_build_lexicon_from_profile() {
        let mut config = AppConfig::default();
        assert_eq!(config.build_lexicon().unwrap().len(), 12);

        config.lexicon.profile = LexiconProfile::Core;
        assert_eq!(config.build_lexicon().unwrap().len(), 4);
    }

    #[test]
    fn test_build_lexicon_from_file_overrides_profile() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[category]]
            key = "calm"
            symbol = "😌"
            description = "Calmness"
            triggers = ["serene", "relaxed"]
            "#
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.lexicon.path = Some(file.path().to_path_buf());
        let lexicon = config.build_lexicon().unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.categories()[0].key, "calm");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(rendered.contains("[engine]"));
        let parsed = AppConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed.server_addr(), config.server_addr());
    }
}
