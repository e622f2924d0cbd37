//! Error types for the speech subsystem.

use yatra_core::error::YatraError;

/// Errors from synthesis and playback.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("no synthesis voice for language: {0}")]
    UnsupportedLanguage(String),
    #[error("synthesis error: {0}")]
    Synthesis(String),
    #[error("playback error: {0}")]
    Playback(String),
    #[error("invalid playback state transition: {0}")]
    InvalidState(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SpeechError> for YatraError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::UnsupportedLanguage(lang) => YatraError::UnsupportedLanguage(lang),
            SpeechError::Synthesis(msg) => YatraError::Synthesis(msg),
            SpeechError::Playback(msg) | SpeechError::InvalidState(msg) => {
                YatraError::Playback(msg)
            }
            SpeechError::Io(e) => YatraError::Io(e),
        }
    }
}
