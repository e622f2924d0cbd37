//! Audio output backends.
//!
//! A sink plays one artifact to completion, polling the cancellation
//! token at a fixed interval so a stop request is honored within one
//! interval. Sinks are blocking; the controller runs them on a blocking
//! task.

use std::path::Path;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::SpeechError;

/// Playback backend contract.
pub trait AudioSink: Send + Sync {
    /// Play the artifact until it is exhausted or `cancel` fires.
    ///
    /// Returns once output has halted. Observes `cancel` at least once
    /// per poll interval.
    fn play(&self, artifact: &Path, cancel: &CancellationToken) -> Result<(), SpeechError>;
}

/// Clock-paced sink used when no audio backend is enabled.
///
/// Derives a duration from the artifact size at a nominal MP3 bitrate and
/// waits it out, honoring cancellation. Keeps the playback lifecycle
/// fully exercisable on machines without an output device.
pub struct ClockSink {
    poll_interval: Duration,
    bytes_per_sec: u64,
}

/// Nominal 32 kbit/s MP3.
const DEFAULT_BYTES_PER_SEC: u64 = 4_000;

impl ClockSink {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            bytes_per_sec: DEFAULT_BYTES_PER_SEC,
        }
    }

    /// Override the pacing rate (tests use a fast clock).
    pub fn with_rate(poll_interval: Duration, bytes_per_sec: u64) -> Self {
        Self {
            poll_interval,
            bytes_per_sec: bytes_per_sec.max(1),
        }
    }
}

impl AudioSink for ClockSink {
    fn play(&self, artifact: &Path, cancel: &CancellationToken) -> Result<(), SpeechError> {
        let len = std::fs::metadata(artifact)?.len();
        let duration = Duration::from_millis(len.saturating_mul(1_000) / self.bytes_per_sec);
        debug!(artifact = %artifact.display(), ?duration, "Clock-paced playback");

        let started = Instant::now();
        while started.elapsed() < duration {
            if cancel.is_cancelled() {
                debug!("Playback cancelled");
                break;
            }
            std::thread::sleep(self.poll_interval.min(duration - started.elapsed().min(duration)));
        }
        Ok(())
    }
}

/// Real audio output through rodio.
#[cfg(feature = "rodio-output")]
pub struct RodioSink {
    poll_interval: Duration,
}

#[cfg(feature = "rodio-output")]
impl RodioSink {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

#[cfg(feature = "rodio-output")]
impl AudioSink for RodioSink {
    fn play(&self, artifact: &Path, cancel: &CancellationToken) -> Result<(), SpeechError> {
        use std::fs::File;
        use std::io::BufReader;

        // The output stream must stay alive for the duration of playback,
        // and it is not Send, so it lives entirely inside this call.
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| SpeechError::Playback(e.to_string()))?;
        let sink = rodio::Sink::try_new(&handle)
            .map_err(|e| SpeechError::Playback(e.to_string()))?;

        let file = File::open(artifact)?;
        let source = rodio::Decoder::new(BufReader::new(file))
            .map_err(|e| SpeechError::Playback(e.to_string()))?;
        sink.append(source);

        loop {
            if cancel.is_cancelled() {
                sink.stop();
                break;
            }
            if sink.empty() {
                break;
            }
            std::thread::sleep(self.poll_interval);
        }
        Ok(())
    }
}
