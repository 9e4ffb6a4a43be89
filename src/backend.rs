/// Playback backend seam
///
/// The manager only needs a small transport contract from the host platform:
/// set volume, set loop, rewind, fallible start, pause, and a report of
/// natural end-of-stream. Keeping that behind a trait lets the manager's
/// bookkeeping be tested against a scripted fake without audio hardware.
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::clip::ClipConfig;
use crate::error::AudioError;

/// One clip's playback transport, exclusively owned by its registry entry
pub trait PlaybackHandle {
    /// Apply an already-composed volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Whether playback repeats until explicitly stopped
    fn set_looped(&mut self, looped: bool);

    /// Reset the playback position to the start
    fn rewind(&mut self);

    /// Start (or continue) playback; the host may reject the start
    fn play(&mut self) -> Result<(), AudioError>;

    /// Halt playback, retaining the current position
    fn pause(&mut self);

    /// Current playback position
    fn position(&self) -> Duration;

    /// True once the stream reached its natural end; explicit stop or pause
    /// does not count
    fn finished(&self) -> bool;

    /// Drop buffered data; the handle is unusable afterwards
    fn release(&mut self);
}

/// Creates playback handles from clip configurations
pub trait PlaybackBackend {
    type Handle: PlaybackHandle;

    fn load(&self, config: &ClipConfig) -> Result<Self::Handle, AudioError>;
}

/// Rodio-backed playback
///
/// Owns the output stream; every handle gets its own sink on that stream so
/// clips can play simultaneously.
pub struct RodioBackend {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl RodioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }
}

impl PlaybackBackend for RodioBackend {
    type Handle = RodioHandle;

    fn load(&self, config: &ClipConfig) -> Result<RodioHandle, AudioError> {
        let path = &config.source;
        if !path.exists() {
            return Err(AudioError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "audio file not found",
                )),
            });
        }

        // Preload the whole file so play never touches the filesystem
        let data = std::fs::read(path).map_err(|e| AudioError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Preloaded audio clip");

        // Warm-up pass: verify the data decodes before registering the clip.
        // rodio's Decoder needs owned data, hence the clone.
        let cursor = Cursor::new(data.clone());
        let decoder = Decoder::new(cursor).map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;
        let _ = decoder.count();

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;

        Ok(RodioHandle {
            stream_handle: self.stream_handle.clone(),
            sink,
            data: Arc::new(data),
            looped: config.looped,
            queued_looped: None,
            volume: 1.0,
        })
    }
}

/// Single-stream transport over one rodio sink
pub struct RodioHandle {
    stream_handle: OutputStreamHandle,
    sink: Sink,
    data: Arc<Vec<u8>>,
    looped: bool,
    /// Loop mode of the source currently queued in the sink, `None` when
    /// nothing is queued
    queued_looped: Option<bool>,
    volume: f32,
}

impl std::fmt::Debug for RodioHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioHandle")
            .field("looped", &self.looped)
            .field("queued_looped", &self.queued_looped)
            .field("volume", &self.volume)
            .finish_non_exhaustive()
    }
}

impl RodioHandle {
    /// Replace the sink when the queued source cannot seek back
    fn reset_sink(&mut self) {
        if let Ok(sink) = Sink::try_new(&self.stream_handle) {
            self.sink.stop();
            sink.set_volume(self.volume);
            sink.pause();
            self.sink = sink;
            self.queued_looped = None;
        }
    }

    /// A queued source's repeat mode is fixed at append time, so a loop-flag
    /// change while something is queued needs a fresh append.
    fn requeue_needed(queued_looped: Option<bool>, looped: bool, sink_empty: bool) -> bool {
        !sink_empty && queued_looped != Some(looped)
    }
}

impl PlaybackHandle for RodioHandle {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(self.volume);
    }

    fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
    }

    fn rewind(&mut self) {
        if self.sink.empty() {
            // Nothing queued; the next play starts from zero anyway
            return;
        }
        if self.sink.try_seek(Duration::ZERO).is_err() {
            self.reset_sink();
        }
    }

    fn play(&mut self) -> Result<(), AudioError> {
        if Self::requeue_needed(self.queued_looped, self.looped, self.sink.empty()) {
            self.reset_sink();
        }
        if self.sink.empty() {
            let cursor = Cursor::new((*self.data).clone());
            let decoder =
                Decoder::new(cursor).map_err(|e| AudioError::StartRejected(Box::new(e)))?;
            if self.looped {
                self.sink.append(decoder.repeat_infinite());
            } else {
                self.sink.append(decoder);
            }
            self.queued_looped = Some(self.looped);
        }
        self.sink.set_volume(self.volume);
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn finished(&self) -> bool {
        self.sink.empty()
    }

    fn release(&mut self) {
        self.sink.stop();
    }
}
