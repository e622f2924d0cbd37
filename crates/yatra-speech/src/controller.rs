//! Playback lifecycle controller.
//!
//! One controller owns at most one in-flight playback session. `speak`
//! synthesizes an artifact and schedules playback on a background task,
//! returning immediately; `stop` requests cooperative cancellation, which
//! the playback task observes within one poll interval. The artifact is
//! deleted on every exit path.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use yatra_core::config::SpeechConfig;

use crate::error::SpeechError;
use crate::sink::{AudioSink, ClockSink};
use crate::state::{PlaybackState, StateMachine};
use crate::synth::{GoogleSynthesizer, SpeechSynthesizer};
use crate::voice;

/// One in-flight rendering: its stop token and the artifact it owns.
struct PlaybackSession {
    cancel: CancellationToken,
    #[allow(dead_code)]
    artifact: PathBuf,
}

/// Manages converting response text to audio and playing it with
/// cooperative interruption.
pub struct PlaybackController {
    state: StateMachine,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    sink: Arc<dyn AudioSink>,
    artifact_dir: PathBuf,
    poll_interval: Duration,
    session: Mutex<Option<PlaybackSession>>,
}

impl PlaybackController {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        sink: Arc<dyn AudioSink>,
        artifact_dir: impl Into<PathBuf>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            state: StateMachine::new(),
            synthesizer,
            sink,
            artifact_dir: artifact_dir.into(),
            poll_interval,
            session: Mutex::new(None),
        }
    }

    /// Build a controller from configuration with the default backend.
    pub fn from_config(
        config: &SpeechConfig,
        artifact_dir: impl Into<PathBuf>,
    ) -> Result<Self, SpeechError> {
        let poll_interval = Duration::from_millis(config.poll_interval_ms.max(1));
        let synthesizer = Arc::new(GoogleSynthesizer::new(config)?);
        Ok(Self::new(
            synthesizer,
            default_sink(poll_interval),
            artifact_dir,
            poll_interval,
        ))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state.current()
    }

    /// Whether a playback session is still winding through its lifecycle.
    pub fn is_playing(&self) -> bool {
        matches!(
            self.state.current(),
            PlaybackState::Playing | PlaybackState::Stopping
        )
    }

    /// Synthesize `text` in the given language and schedule playback.
    ///
    /// Returns as soon as the playback task is running. Fails without
    /// producing audio when the language has no synthesis voice, when a
    /// session is already active, or when synthesis itself fails; the
    /// state machine is back at Idle after any failure.
    pub async fn speak(&self, text: &str, language: &str) -> Result<(), SpeechError> {
        self.state.transition(PlaybackState::Rendering)?;

        let Some(voice) = voice::resolve_voice(language) else {
            self.state.reset();
            return Err(SpeechError::UnsupportedLanguage(language.to_string()));
        };

        let cleaned = strip_decorations(text);
        let audio = match self.synthesizer.synthesize(&cleaned, voice).await {
            Ok(audio) => audio,
            Err(e) => {
                self.state.reset();
                return Err(e);
            }
        };

        let artifact = match self.write_artifact(&audio) {
            Ok(path) => path,
            Err(e) => {
                self.state.reset();
                return Err(e);
            }
        };

        let cancel = CancellationToken::new();
        self.state.transition(PlaybackState::Playing)?;
        debug!(artifact = %artifact.display(), "Playback scheduled");

        tokio::spawn(playback_task(
            self.state.clone(),
            Arc::clone(&self.sink),
            artifact.clone(),
            cancel.clone(),
        ));

        let mut session = self.session.lock().expect("session mutex poisoned");
        *session = Some(PlaybackSession { cancel, artifact });
        Ok(())
    }

    /// Request cooperative cancellation of the active session.
    ///
    /// Idempotent; a no-op when nothing is playing.
    pub fn stop(&self) {
        let session = self.session.lock().expect("session mutex poisoned");
        if let Some(session) = session.as_ref() {
            session.cancel.cancel();
        }
    }

    /// Poll until the active session (if any) has fully wound down.
    pub async fn wait_until_idle(&self) {
        while self.is_playing() {
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    fn write_artifact(&self, audio: &[u8]) -> Result<PathBuf, SpeechError> {
        std::fs::create_dir_all(&self.artifact_dir)?;
        let path = self
            .artifact_dir
            .join(format!("speech_{}.mp3", Uuid::new_v4()));
        std::fs::write(&path, audio)?;
        Ok(path)
    }
}

/// Runs the sink, then releases the artifact and settles the state
/// machine. Cleanup runs no matter how playback ended.
async fn playback_task(
    state: StateMachine,
    sink: Arc<dyn AudioSink>,
    artifact: PathBuf,
    cancel: CancellationToken,
) {
    let blocking_artifact = artifact.clone();
    let blocking_cancel = cancel.clone();
    let outcome =
        tokio::task::spawn_blocking(move || sink.play(&blocking_artifact, &blocking_cancel)).await;

    match outcome {
        Ok(Ok(())) => debug!("Playback finished"),
        Ok(Err(e)) => warn!("Playback failed: {e}"),
        Err(e) => warn!("Playback task panicked: {e}"),
    }

    if let Err(e) = std::fs::remove_file(&artifact) {
        warn!(artifact = %artifact.display(), "Failed to remove audio artifact: {e}");
    }

    if state.transition(PlaybackState::Stopping).is_err()
        || state.transition(PlaybackState::Idle).is_err()
    {
        state.reset();
    }
}

/// Strip markdown-style decoration characters before synthesis.
fn strip_decorations(text: &str) -> String {
    use std::sync::LazyLock;

    static DECORATIONS: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"[*_#`~]+").expect("Invalid decoration regex"));
    DECORATIONS.replace_all(text, "").into_owned()
}

/// Default playback backend for the enabled feature set.
pub fn default_sink(poll_interval: Duration) -> Arc<dyn AudioSink> {
    #[cfg(feature = "rodio-output")]
    {
        Arc::new(crate::sink::RodioSink::new(poll_interval))
    }
    #[cfg(not(feature = "rodio-output"))]
    {
        Arc::new(ClockSink::new(poll_interval))
    }
}
