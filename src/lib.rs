//! Sound playback state management for a game UI.
//!
//! A thin bookkeeping layer over a host playback primitive: clips are
//! registered once from a fixed table, volumes compose across independent
//! music and sfx buses, and transport state is tracked per clip.
//!
//! ## Architecture
//!
//! ```text
//! AudioManager
//!   ├── MixerState (enabled, master/music/sfx sliders)
//!   └── Registry: key -> ClipEntry
//!         ├── ClipConfig (bus, loop, base volume)
//!         └── PlaybackHandle (backend-owned transport)
//!
//! effective volume = base x bus slider x master   (0 while disabled)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use game_audio::{AudioManager, ClipTable, PlayOptions, RodioBackend};
//!
//! let backend = RodioBackend::new()?;
//! let mut audio = AudioManager::new(backend, ClipTable::default());
//! audio.initialize();
//!
//! audio.play("backgroundMusic");
//! audio.play_with("victory", PlayOptions::default().with_volume(0.9));
//! audio.set_music_volume(0.4);
//! audio.stop_all_music();
//! ```
//!
//! Decoding, mixing, and output routing belong to the backend; the manager
//! never crashes the game over an audio failure.

pub mod backend;
pub mod bus;
pub mod clip;
pub mod config;
pub mod error;
pub mod manager;
pub mod mixer;

// Re-export commonly used types
pub use backend::{PlaybackBackend, PlaybackHandle, RodioBackend, RodioHandle};
pub use bus::Bus;
pub use clip::{ClipConfig, PlayOptions};
pub use config::ClipTable;
pub use error::{AppResult, AudioError, ConfigError};
pub use manager::AudioManager;
pub use mixer::MixerState;
