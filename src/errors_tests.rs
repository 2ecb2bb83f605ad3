//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use crate::errors::EmotiscopeError;
    use std::io;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = EmotiscopeError::Custom("Test error message".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Test error message");
    }

    #[test]
    fn test_malformed_lexicon_error() {
        let error = EmotiscopeError::MalformedLexicon("trigger 'glad' in joy and trust".to_string());
        assert!(matches!(error, EmotiscopeError::MalformedLexicon(_)));
        let display = format!("{}", error);
        assert!(display.starts_with("Malformed lexicon"));
        assert!(display.contains("glad"));
    }

    #[test]
    fn test_delegate_shorthand() {
        let error = EmotiscopeError::delegate("tagger crashed");
        assert!(matches!(error, EmotiscopeError::DelegateUnavailable(_)));
        assert_eq!(format!("{}", error), "NLP delegate unavailable: tagger crashed");
    }

    #[test]
    fn test_config_error() {
        let error = EmotiscopeError::ConfigError("Invalid configuration".to_string());
        let display = format!("{}", error);
        assert!(display.contains("configuration"));
    }

    // ====== Fatality ======

    #[test]
    fn test_only_configuration_faults_are_fatal() {
        assert!(EmotiscopeError::MalformedLexicon("x".into()).is_fatal());
        assert!(EmotiscopeError::ConfigError("x".into()).is_fatal());
        assert!(!EmotiscopeError::delegate("x").is_fatal());
        assert!(!EmotiscopeError::InvalidInput("x".into()).is_fatal());
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: EmotiscopeError = io_err.into();

        assert!(matches!(err, EmotiscopeError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: Result<serde_json::Value, _> = serde_json::from_str("{invalid json}");

        if let Err(json_err) = parse_result {
            let err: EmotiscopeError = json_err.into();
            assert!(matches!(err, EmotiscopeError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_from_toml() {
        let parse_result: Result<toml::Value, _> = toml::from_str("key = = value");
        let err: EmotiscopeError = parse_result.unwrap_err().into();
        assert!(matches!(err, EmotiscopeError::TomlParsing(_)));
    }

    // ====== Error Debug/Display Tests ======

    #[test]
    fn test_error_debug_format() {
        let error = EmotiscopeError::Custom("Debug test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Custom"));
    }
}
