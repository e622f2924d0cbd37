use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, YatraError};

/// Top-level configuration for the Yatra application.
///
/// Loaded from `~/.yatra/config.toml` by default. Each section corresponds
/// to one collaborator or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YatraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl YatraConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: YatraConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| YatraError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Directory for generated artifacts (map files, synthesized audio).
    pub artifact_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            artifact_dir: "~/.yatra/artifacts".to_string(),
        }
    }
}

/// HTTP API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Port the site-listing API binds to (localhost only).
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3030 }
    }
}

/// Translation endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Translation endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Language-model (Ollama) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the Ollama server.
    pub endpoint: String,
    /// Model tag to generate with.
    pub model: String,
    /// Request timeout in seconds. Generation is slow; keep this generous.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:11434".to_string(),
            model: "llama3:8b".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Geocoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    /// Nominatim search endpoint.
    pub endpoint: String,
    /// User-Agent sent with geocoding requests (Nominatim requires one).
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Region suffixes appended to queries, tried in order. The empty
    /// string means "query the place name as given".
    pub region_suffixes: Vec<String>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "yatra-heritage-guide".to_string(),
            timeout_secs: 10,
            region_suffixes: vec![
                "Tamil Nadu, India".to_string(),
                "India".to_string(),
                String::new(),
            ],
        }
    }
}

/// Speech synthesis and playback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Text-to-speech endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Interval at which the playback task checks the stop flag.
    pub poll_interval_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.google.com/translate_tts".to_string(),
            timeout_secs: 15,
            poll_interval_ms: 100,
        }
    }
}
