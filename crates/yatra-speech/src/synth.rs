//! Speech synthesis over the Google TTS endpoint.
//!
//! The endpoint rejects long inputs, so text is chunked sentence-wise
//! before synthesis and the returned MP3 segments are concatenated.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use yatra_core::config::SpeechConfig;

use crate::error::SpeechError;

/// Maximum characters per synthesis request.
pub(crate) const MAX_CHUNK_CHARS: usize = 200;

/// Narrow synthesis contract: text + voice code in, audio bytes out.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError>;
}

/// Client for the `translate_tts` endpoint.
pub struct GoogleSynthesizer {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleSynthesizer {
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    async fn fetch_chunk(&self, chunk: &str, voice: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", voice),
                ("q", chunk),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?
            .error_for_status()
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::Synthesis("nothing to synthesize".to_string()));
        }

        let chunks = chunk_text(text);
        debug!(chunks = chunks.len(), voice, "Synthesizing speech");

        // MP3 frames concatenate into a playable stream, so chunk
        // responses are simply appended.
        let mut audio = Vec::new();
        for chunk in &chunks {
            audio.extend(self.fetch_chunk(chunk, voice).await?);
        }

        if audio.is_empty() {
            return Err(SpeechError::Synthesis("empty audio response".to_string()));
        }
        Ok(audio)
    }
}

/// Split text into synthesis-sized chunks without breaking sentences.
///
/// Sentences (ending at `.`, `!`, `?`, or a newline) are packed greedily
/// up to [`MAX_CHUNK_CHARS`]; an oversized sentence becomes its own chunk
/// rather than being split mid-phrase. Concatenating the chunks
/// reproduces the input exactly.
pub(crate) fn chunk_text(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in text.split_inclusive(['.', '!', '?', '\n']) {
        let len = sentence.chars().count();
        if current_len > 0 && current_len + len > MAX_CHUNK_CHARS {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(sentence);
        current_len += len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
