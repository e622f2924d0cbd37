//! Language-model collaborator.
//!
//! Talks to a locally hosted Ollama server over its `/api/generate`
//! endpoint. The conversation core only sees the [`LanguageModel`] trait;
//! prompt construction lives in [`prompts`].

pub mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use yatra_core::config::LlmConfig;
use yatra_core::error::{Result, YatraError};

/// Narrow language-model contract the conversation core depends on.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Long-form description of a heritage site.
    async fn describe(&self, site: &str) -> Result<String>;

    /// Answer a question, optionally scoped to a site.
    async fn chat(&self, question: &str, site: Option<&str>) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for an Ollama server.
pub struct OllamaClient {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| YatraError::Llm(e.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client,
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.endpoint);
        debug!(model = %self.model, prompt_len = prompt.len(), "Ollama generate");

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| YatraError::Llm(e.to_string()))?
            .error_for_status()
            .map_err(|e| YatraError::Llm(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| YatraError::Llm(e.to_string()))?;

        let text = body.response.trim().to_string();
        if text.is_empty() {
            return Err(YatraError::Llm("empty completion".to_string()));
        }
        Ok(text)
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn describe(&self, site: &str) -> Result<String> {
        self.generate(&prompts::site_description(site)).await
    }

    async fn chat(&self, question: &str, site: Option<&str>) -> Result<String> {
        let prompt = match site {
            Some(site) => prompts::site_chat(question, site),
            None => prompts::general_chat(question),
        };
        self.generate(&prompt).await
    }
}
