use thiserror::Error;

/// Top-level error type for the Yatra system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for YatraError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum YatraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Language model error: {0}")]
    Llm(String),

    #[error("Geocoding error: {0}")]
    Geocode(String),

    #[error("Map rendering error: {0}")]
    MapRender(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Site not found: {0}")]
    SiteNotFound(String),

    #[error("No tourist sites found for {0}")]
    NoSites(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for YatraError {
    fn from(err: toml::de::Error) -> Self {
        YatraError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for YatraError {
    fn from(err: toml::ser::Error) -> Self {
        YatraError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for YatraError {
    fn from(err: serde_json::Error) -> Self {
        YatraError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Yatra operations.
pub type Result<T> = std::result::Result<T, YatraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = YatraError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: YatraError = io_err.into();
        assert!(matches!(err, YatraError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(YatraError, &str)> = vec![
            (
                YatraError::UnsupportedLanguage("klingon".to_string()),
                "Unsupported language: klingon",
            ),
            (
                YatraError::Translation("empty response".to_string()),
                "Translation error: empty response",
            ),
            (
                YatraError::Llm("model not loaded".to_string()),
                "Language model error: model not loaded",
            ),
            (
                YatraError::Geocode("timed out".to_string()),
                "Geocoding error: timed out",
            ),
            (
                YatraError::MapRender("disk full".to_string()),
                "Map rendering error: disk full",
            ),
            (
                YatraError::Synthesis("endpoint unreachable".to_string()),
                "Speech synthesis error: endpoint unreachable",
            ),
            (
                YatraError::Playback("no output device".to_string()),
                "Playback error: no output device",
            ),
            (
                YatraError::SiteNotFound("Atlantis".to_string()),
                "Site not found: Atlantis",
            ),
            (
                YatraError::NoSites("Nowhere".to_string()),
                "No tourist sites found for Nowhere",
            ),
            (
                YatraError::Api("bind failed".to_string()),
                "API error: bind failed",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let err: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(err.is_err());
        let yatra_err: YatraError = err.unwrap_err().into();
        assert!(matches!(yatra_err, YatraError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(err.is_err());
        let yatra_err: YatraError = err.unwrap_err().into();
        assert!(matches!(yatra_err, YatraError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = YatraError::Translation("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Translation"));
        assert!(debug_str.contains("test debug"));
    }
}
