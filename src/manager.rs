/// Audio manager
///
/// Owns the clip registry and the mixer state, and delegates actual playback
/// to the backend. Pure bookkeeping: every operation mutates local state and
/// forwards at most one transport call per clip.
///
/// Failure policy: no public method returns an error or panics. Audio must
/// never take the game down, so load and start failures are logged and
/// absorbed.
use std::collections::HashMap;

use crate::backend::{PlaybackBackend, PlaybackHandle};
use crate::bus::Bus;
use crate::clip::{ClipConfig, PlayOptions};
use crate::config::ClipTable;
use crate::mixer::MixerState;

/// One registered clip: its config, its transport, and the manager's belief
/// about whether it is playing.
///
/// `handle` is `None` when the backend refused to load the source; the entry
/// stays registered and transport calls on it no-op.
struct ClipEntry<H> {
    config: ClipConfig,
    handle: Option<H>,
    playing: bool,
}

impl<H: PlaybackHandle> ClipEntry<H> {
    /// The stored flag reconciled against the handle's natural-end report.
    /// The flag is advisory; a clip that ran to its end is not playing even
    /// if no one has observed that yet.
    fn is_audibly_playing(&self) -> bool {
        self.playing && self.handle.as_ref().is_some_and(|h| !h.finished())
    }
}

/// Sound playback state for the whole game UI
pub struct AudioManager<B: PlaybackBackend> {
    backend: B,
    table: ClipTable,
    registry: HashMap<String, ClipEntry<B::Handle>>,
    mixer: MixerState,
}

impl<B: PlaybackBackend> AudioManager<B> {
    /// Create a manager with an empty registry; call [`initialize`] to load
    /// the table.
    ///
    /// [`initialize`]: AudioManager::initialize
    pub fn new(backend: B, table: ClipTable) -> Self {
        Self {
            backend,
            table,
            registry: HashMap::new(),
            mixer: MixerState::new(),
        }
    }

    /// Load every clip in the table and register it.
    ///
    /// A clip that fails to load is still registered (with a warning) so the
    /// rest of the table stays usable; playing it later is a quiet no-op.
    /// Calling this again without [`cleanup`](AudioManager::cleanup) replaces
    /// existing entries without releasing their handles first.
    pub fn initialize(&mut self) {
        for config in self.table.clips.clone() {
            let handle = match self.backend.load(&config) {
                Ok(mut handle) => {
                    handle.set_looped(config.looped);
                    handle.set_volume(
                        self.mixer.effective_volume(config.base_volume, config.bus),
                    );
                    Some(handle)
                }
                Err(e) => {
                    tracing::warn!(key = %config.key, error = %e, "Failed to load audio clip");
                    None
                }
            };

            let key = config.key.clone();
            if self
                .registry
                .insert(
                    key.clone(),
                    ClipEntry {
                        config,
                        handle,
                        playing: false,
                    },
                )
                .is_some()
            {
                tracing::debug!(key = %key, "Replaced existing clip entry");
            }
        }
        tracing::info!(clips = self.registry.len(), "Audio manager initialized");
    }

    /// Play a clip with default options (restart from the beginning).
    pub fn play(&mut self, key: &str) {
        self.play_with(key, PlayOptions::default());
    }

    /// Play a clip, applying one-call overrides.
    ///
    /// No-op while the mixer is disabled. An unknown key logs a warning.
    /// Repeated calls on the same key are not queued; each restarts the
    /// single-stream handle and the last call wins.
    pub fn play_with(&mut self, key: &str, options: PlayOptions) {
        if !self.mixer.is_enabled() {
            return;
        }

        let Some(entry) = self.registry.get_mut(key) else {
            tracing::warn!(key, "Unknown audio clip");
            return;
        };
        let Some(handle) = entry.handle.as_mut() else {
            tracing::warn!(key, "Clip has no loaded handle, ignoring play");
            return;
        };

        if let Some(base_volume) = options.volume {
            handle.set_volume(self.mixer.effective_volume(base_volume, entry.config.bus));
        }
        if let Some(looped) = options.looped {
            handle.set_looped(looped);
        }
        if options.restart {
            handle.rewind();
        }

        match handle.play() {
            Ok(()) => entry.playing = true,
            Err(e) => tracing::warn!(key, error = %e, "Playback start failed"),
        }
    }

    /// Halt a clip and rewind it. Unknown or already-stopped keys are
    /// silently ignored.
    pub fn stop(&mut self, key: &str) {
        if let Some(entry) = self.registry.get_mut(key) {
            if entry.playing {
                if let Some(handle) = entry.handle.as_mut() {
                    handle.pause();
                    handle.rewind();
                }
                entry.playing = false;
            }
        }
    }

    /// Halt a clip, retaining its position for [`resume`](AudioManager::resume).
    pub fn pause(&mut self, key: &str) {
        if let Some(entry) = self.registry.get_mut(key) {
            if entry.playing {
                if let Some(handle) = entry.handle.as_mut() {
                    handle.pause();
                }
                entry.playing = false;
            }
        }
    }

    /// Continue a paused clip from its current position.
    pub fn resume(&mut self, key: &str) {
        if let Some(entry) = self.registry.get_mut(key) {
            if !entry.is_audibly_playing() {
                if let Some(handle) = entry.handle.as_mut() {
                    match handle.play() {
                        Ok(()) => entry.playing = true,
                        Err(e) => tracing::warn!(key, error = %e, "Resume failed"),
                    }
                }
            }
        }
    }

    /// Stop every playing clip on the music bus.
    pub fn stop_all_music(&mut self) {
        self.stop_bus(Some(Bus::Music));
    }

    /// Stop every playing clip.
    pub fn stop_all(&mut self) {
        self.stop_bus(None);
        tracing::debug!("Stopped all audio clips");
    }

    fn stop_bus(&mut self, bus: Option<Bus>) {
        let keys: Vec<String> = self
            .registry
            .iter()
            .filter(|(_, e)| e.playing && bus.map_or(true, |b| e.config.bus == b))
            .map(|(k, _)| k.clone())
            .collect();
        for key in keys {
            self.stop(&key);
        }
    }

    /// Flip the global enable switch.
    ///
    /// Disabling stops everything and re-applies volumes, which the formula
    /// floors to zero while disabled; both effects are intentional so a clip
    /// started through any gap stays silent.
    pub fn toggle_audio(&mut self) {
        let enabled = self.mixer.toggle();
        if !enabled {
            self.stop_all();
        }
        self.apply_volumes(None);
        tracing::debug!(enabled, "Audio toggled");
    }

    /// Set the master slider (clamped to [0, 1]) and re-scale every clip.
    pub fn set_master_volume(&mut self, volume: f32) {
        self.mixer.set_master(volume);
        self.apply_volumes(None);
    }

    /// Set the music slider and re-scale music-bus clips only.
    pub fn set_music_volume(&mut self, volume: f32) {
        self.mixer.set_music(volume);
        self.apply_volumes(Some(Bus::Music));
    }

    /// Set the sfx slider and re-scale sfx-bus clips only.
    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.mixer.set_sfx(volume);
        self.apply_volumes(Some(Bus::Sfx));
    }

    fn apply_volumes(&mut self, bus: Option<Bus>) {
        for entry in self.registry.values_mut() {
            if bus.map_or(true, |b| entry.config.bus == b) {
                let volume = self
                    .mixer
                    .effective_volume(entry.config.base_volume, entry.config.bus);
                if let Some(handle) = entry.handle.as_mut() {
                    handle.set_volume(volume);
                }
            }
        }
    }

    /// Whether a clip is currently playing; false for unknown keys.
    pub fn is_playing(&self, key: &str) -> bool {
        self.registry
            .get(key)
            .map(|entry| entry.is_audibly_playing())
            .unwrap_or(false)
    }

    pub fn is_audio_enabled(&self) -> bool {
        self.mixer.is_enabled()
    }

    pub fn master_volume(&self) -> f32 {
        self.mixer.master()
    }

    pub fn music_volume(&self) -> f32 {
        self.mixer.music()
    }

    pub fn sfx_volume(&self) -> f32 {
        self.mixer.sfx()
    }

    /// Number of registered clips
    pub fn loaded_count(&self) -> usize {
        self.registry.len()
    }

    /// Pause and release every handle, then empty the registry.
    ///
    /// Idempotent; also runs from `Drop` so teardown is tied to the owner's
    /// lifetime.
    pub fn cleanup(&mut self) {
        if self.registry.is_empty() {
            return;
        }
        for (_, mut entry) in self.registry.drain() {
            if let Some(handle) = entry.handle.as_mut() {
                handle.pause();
                handle.release();
            }
        }
        tracing::debug!("Released all audio clips");
    }
}

impl<B: PlaybackBackend> Drop for AudioManager<B> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
