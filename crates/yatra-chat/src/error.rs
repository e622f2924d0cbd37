//! Error types for the conversational core.

use yatra_core::error::YatraError;
use yatra_speech::SpeechError;

/// Errors from the conversation loop.
///
/// Collaborator failures (translation, language model, speech) degrade
/// inside the loop and never surface here; these variants cover the
/// failures the loop cannot absorb, chiefly terminal I/O.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("speech error: {0}")]
    Speech(#[from] SpeechError),
    #[error("{0}")]
    Core(#[from] YatraError),
}
