//! Translation collaborator.
//!
//! Thin client for the public Google translate endpoint. The contract is
//! deliberately forgiving: on any failure (unsupported language, network
//! error, malformed response) `translate` returns the original text and
//! logs the problem, so callers never have to branch on translation errors.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use yatra_core::config::TranslatorConfig;
use yatra_core::error::{Result, YatraError};
use yatra_core::lang;

/// Narrow translation contract the conversation core depends on.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the named language.
    ///
    /// Degrades to returning `text` unchanged when the target language is
    /// unsupported or the request fails.
    async fn translate(&self, text: &str, target_language: &str) -> String;

    /// Whether the named language is a valid translation target.
    fn is_supported(&self, language: &str) -> bool;
}

/// Client for the `translate_a/single` endpoint.
pub struct GoogleTranslator {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| YatraError::Translation(e.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    async fn request_translation(&self, text: &str, code: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", code),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| YatraError::Translation(e.to_string()))?
            .error_for_status()
            .map_err(|e| YatraError::Translation(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| YatraError::Translation(e.to_string()))?;

        extract_translation(&body)
            .ok_or_else(|| YatraError::Translation("empty response".to_string()))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> String {
        let Some(code) = lang::language_code(target_language) else {
            warn!("Unsupported translation target: {target_language}");
            return text.to_string();
        };

        if text.trim().is_empty() {
            return text.to_string();
        }

        match self.request_translation(text, code).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation to {target_language} failed: {e}");
                text.to_string()
            }
        }
    }

    fn is_supported(&self, language: &str) -> bool {
        lang::is_supported(language)
    }
}

/// Pull the translated text out of the endpoint's nested-array response:
/// `[[["<translated>", "<source>", ...], ...], null, "<detected>"]`.
/// Segments are concatenated; `None` if the shape is unexpected.
fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(piece) = segment.get(0).and_then(Value::as_str) {
            out.push_str(piece);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
