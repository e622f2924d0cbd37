//! Speech synthesis and playback lifecycle.
//!
//! Turns response text into an audio artifact, plays it on a background
//! task, and supports cooperative interruption: a stop request is observed
//! within one poll interval, and the artifact is cleaned up on every exit
//! path.

pub mod controller;
pub mod error;
pub mod sink;
pub mod state;
pub mod synth;
pub mod voice;

pub use controller::PlaybackController;
pub use error::SpeechError;
pub use sink::{AudioSink, ClockSink};
pub use state::{PlaybackState, StateMachine};
pub use synth::{GoogleSynthesizer, SpeechSynthesizer};
pub use voice::resolve_voice;

#[cfg(feature = "rodio-output")]
pub use sink::RodioSink;
