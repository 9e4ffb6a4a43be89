/// Playback buses
///
/// Every clip belongs to exactly one bus; the bus decides which volume
/// slider scales it.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Volume bus categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bus {
    /// Background music, scaled by the music slider
    Music,

    /// One-shot sound effects, scaled by the sfx slider
    Sfx,
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bus::Music => write!(f, "Music"),
            Bus::Sfx => write!(f, "Sfx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_display() {
        assert_eq!(Bus::Music.to_string(), "Music");
        assert_eq!(Bus::Sfx.to_string(), "Sfx");
    }

    #[test]
    fn test_bus_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Bus::Music).unwrap(), "\"music\"");
        let bus: Bus = serde_json::from_str("\"sfx\"").unwrap();
        assert_eq!(bus, Bus::Sfx);
    }
}
