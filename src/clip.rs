/// Clip configuration and per-call playback options
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bus::Bus;

/// Static description of one named audio clip
///
/// Immutable after startup; the registry copies it into its entry at
/// initialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Registry key the game uses to address this clip
    pub key: String,

    /// Path to the encoded audio file
    pub source: PathBuf,

    /// Bus whose slider scales this clip
    pub bus: Bus,

    /// Whether playback repeats until stopped
    #[serde(default)]
    pub looped: bool,

    /// Per-clip volume before bus and master scaling (0.0-1.0)
    pub base_volume: f32,
}

/// Per-call overrides for [`AudioManager::play_with`](crate::AudioManager::play_with)
///
/// Overrides apply to the single call only and never persist to the clip's
/// configuration.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Replace the clip's base volume for this call (still bus/master scaled)
    pub volume: Option<f32>,

    /// Override the handle's loop flag for this call
    pub looped: Option<bool>,

    /// Rewind to the start before playing (default true)
    pub restart: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            volume: None,
            looped: None,
            restart: true,
        }
    }
}

impl PlayOptions {
    /// Set a one-call base volume
    ///
    /// Clamped to [0, 1] here so an out-of-range value never reaches the
    /// backend, matching the slider setters.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = Some(volume.clamp(0.0, 1.0));
        self
    }

    /// Set a one-call loop override
    pub fn with_loop(mut self, looped: bool) -> Self {
        self.looped = Some(looped);
        self
    }

    /// Continue from the current position instead of rewinding
    pub fn no_restart(mut self) -> Self {
        self.restart = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_options_defaults() {
        let opts = PlayOptions::default();
        assert!(opts.volume.is_none());
        assert!(opts.looped.is_none());
        assert!(opts.restart);
    }

    #[test]
    fn test_play_options_builder() {
        let opts = PlayOptions::default()
            .with_volume(0.4)
            .with_loop(true)
            .no_restart();
        assert_eq!(opts.volume, Some(0.4));
        assert_eq!(opts.looped, Some(true));
        assert!(!opts.restart);
    }

    #[test]
    fn test_play_options_volume_clamped() {
        assert_eq!(PlayOptions::default().with_volume(5.0).volume, Some(1.0));
        assert_eq!(PlayOptions::default().with_volume(-1.0).volume, Some(0.0));
    }

    #[test]
    fn test_clip_config_loop_defaults_off() {
        let json = r#"{"key":"victory","source":"victory.mp3","bus":"sfx","base_volume":0.7}"#;
        let config: ClipConfig = serde_json::from_str(json).unwrap();
        assert!(!config.looped);
        assert_eq!(config.bus, Bus::Sfx);
    }
}
