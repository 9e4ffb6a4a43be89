/// Mixer state: the global enable switch and the three volume sliders
///
/// Owned by the manager rather than living in a module-level singleton, so
/// its lifetime is tied to the manager's own construction and teardown.
use crate::bus::Bus;

/// Global enable flag plus master/music/sfx sliders, each kept in [0.0, 1.0]
#[derive(Debug, Clone)]
pub struct MixerState {
    enabled: bool,
    master: f32,
    music: f32,
    sfx: f32,
}

impl Default for MixerState {
    fn default() -> Self {
        Self {
            enabled: true,
            master: 0.7,
            music: 0.5,
            sfx: 0.8,
        }
    }
}

impl MixerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Final volume for a clip: base x bus slider x master, floored to 0
    /// while the mixer is disabled.
    pub fn effective_volume(&self, base_volume: f32, bus: Bus) -> f32 {
        if !self.enabled {
            return 0.0;
        }

        let bus_volume = match bus {
            Bus::Music => self.music,
            Bus::Sfx => self.sfx,
        };
        base_volume * bus_volume * self.master
    }

    /// Flip the enable switch; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn set_master(&mut self, volume: f32) {
        self.master = volume.clamp(0.0, 1.0);
    }

    pub fn set_music(&mut self, volume: f32) {
        self.music = volume.clamp(0.0, 1.0);
    }

    pub fn set_sfx(&mut self, volume: f32) {
        self.sfx = volume.clamp(0.0, 1.0);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn master(&self) -> f32 {
        self.master
    }

    pub fn music(&self) -> f32 {
        self.music
    }

    pub fn sfx(&self) -> f32 {
        self.sfx
    }
}
