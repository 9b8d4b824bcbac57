//! Game settings and preferences
//!
//! Stored as a JSON file next to the game. Anything missing or malformed
//! falls back to the defaults, so a bad config never blocks startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Accept arrow keys as direction input (handy without a dance mat)
    pub allow_arrow_keys: bool,
    /// GUID of the preferred joystick, if any
    pub joystick: Option<String>,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_arrow_keys: false,
            joystick: None,
            seed: None,
            master_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to the defaults on any
    /// error.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(error) => {
                    log::warn!("Ignoring malformed settings in {}: {error}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Serialize for saving (the platform layer decides where).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
