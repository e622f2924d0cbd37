//! Playback state machine with thread-safe transitions.
//!
//! Enforces valid state transitions for the playback lifecycle:
//! - Idle -> Rendering (speak requested, synthesizing audio)
//! - Rendering -> Playing (artifact ready, playback task running)
//! - Playing -> Stopping (stop requested or audio exhausted)
//! - Stopping -> Idle (artifact released, session over)
//! - Rendering -> Idle (voice unresolvable or synthesis failed)

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::SpeechError;

/// Operational state of one playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// No playback in progress. Ready to speak.
    Idle,
    /// Synthesizing the audio artifact.
    Rendering,
    /// The playback task is producing audio.
    Playing,
    /// Winding down: output halted, artifact being released.
    Stopping,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "Idle"),
            PlaybackState::Rendering => write!(f, "Rendering"),
            PlaybackState::Playing => write!(f, "Playing"),
            PlaybackState::Stopping => write!(f, "Stopping"),
        }
    }
}

impl PlaybackState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &PlaybackState) -> bool {
        matches!(
            (self, target),
            (PlaybackState::Idle, PlaybackState::Rendering)
                | (PlaybackState::Rendering, PlaybackState::Playing)
                | (PlaybackState::Playing, PlaybackState::Stopping)
                | (PlaybackState::Stopping, PlaybackState::Idle)
                // Synthesis failure path
                | (PlaybackState::Rendering, PlaybackState::Idle)
        )
    }
}

/// Thread-safe state machine shared between the controller and the
/// playback task.
///
/// All transitions are validated before being applied, returning an error
/// if the requested transition is not permitted.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    state: Arc<Mutex<PlaybackState>>,
}

impl StateMachine {
    /// Create a new state machine initialized to `Idle`.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackState::Idle)),
        }
    }

    /// Returns the current state.
    pub fn current(&self) -> PlaybackState {
        *self.state.lock().expect("state mutex poisoned")
    }

    /// Attempt to transition to the target state.
    pub fn transition(&self, target: PlaybackState) -> Result<(), SpeechError> {
        let mut state = self.state.lock().expect("state mutex poisoned");
        if state.can_transition_to(&target) {
            tracing::debug!("Playback state: {} -> {}", *state, target);
            *state = target;
            Ok(())
        } else {
            Err(SpeechError::InvalidState(format!(
                "{} -> {}",
                *state, target
            )))
        }
    }

    /// Force the state machine back to Idle (used for error recovery).
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("state mutex poisoned");
        if *state != PlaybackState::Idle {
            tracing::debug!("Playback state machine reset to Idle from {}", *state);
        }
        *state = PlaybackState::Idle;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState::Idle
    }
}
