use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bus::Bus;
use crate::clip::ClipConfig;
use crate::error::ConfigError;

/// The set of clips the manager registers at initialization.
///
/// Fixed for the lifetime of the process: either the built-in table below or
/// a JSON file read once at startup. Never edited at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipTable {
    pub clips: Vec<ClipConfig>,
}

impl Default for ClipTable {
    fn default() -> Self {
        let clip = |key: &str, file: &str, bus: Bus, looped: bool, base_volume: f32| ClipConfig {
            key: key.to_string(),
            source: Path::new("assets/sounds").join(file),
            bus,
            looped,
            base_volume,
        };

        Self {
            clips: vec![
                clip("backgroundMusic", "main-theme.mp3", Bus::Music, true, 0.3),
                clip("gameOver", "lose-bell.mp3", Bus::Sfx, false, 0.8),
                clip("victory", "victory.mp3", Bus::Sfx, false, 0.7),
                clip("correctLetter", "correct-letter.mp3", Bus::Sfx, false, 0.6),
                clip("wrongLetter", "wrong-letter.mp3", Bus::Sfx, false, 0.5),
            ],
        }
    }
}

impl ClipTable {
    /// Load a clip table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let table: ClipTable =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        table.validate()?;
        tracing::info!(path = %path.display(), clips = table.clips.len(), "Loaded clip table");
        Ok(table)
    }

    /// Load a clip table, falling back to the built-in one on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using built-in clip table");
                Self::default()
            }
        }
    }

    /// Registry keys must be unique and base volumes must sit in [0, 1].
    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for clip in &self.clips {
            if clip.key.is_empty() {
                return Err(ConfigError::Invalid("empty clip key".to_string()));
            }
            if !seen.insert(clip.key.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate key: {}", clip.key)));
            }
            if !(0.0..=1.0).contains(&clip.base_volume) {
                return Err(ConfigError::Invalid(format!(
                    "base volume {} out of range for {}",
                    clip.base_volume, clip.key
                )));
            }
        }
        Ok(())
    }
}
