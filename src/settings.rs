//! Game settings and preferences
//!
//! Persisted as JSON under the user's config directory, separately from the
//! scoreboard. Missing or malformed files fall back to defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Glow rendering quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GlowQuality {
    /// Core shapes only
    Off,
    Low,
    #[default]
    Full,
}

impl GlowQuality {
    /// Number of halo layers drawn around each glowing shape
    pub fn layers(&self) -> u32 {
        match self {
            GlowQuality::Off => 0,
            GlowQuality::Low => 4,
            GlowQuality::Full => 8,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub glow: GlowQuality,
    /// Show the FPS counter
    pub show_fps: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glow: GlowQuality::Full,
            show_fps: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "settings.json";

    /// Load from the config directory, defaulting on any failure
    pub fn load() -> Self {
        let Some(path) = config_file(Self::FILE_NAME) else {
            log::info!("no config directory available, using default settings");
            return Self::default();
        };
        match read_json(&path) {
            Some(settings) => settings,
            None => Self::default(),
        }
    }

    /// Save to the config directory; failures only warn
    pub fn save(&self) {
        let Some(path) = config_file(Self::FILE_NAME) else {
            return;
        };
        if let Err(err) = write_json(&path, self) {
            log::warn!("failed to save settings to {}: {err}", path.display());
        }
    }
}

/// Path of a file inside this game's config directory
pub(crate) fn config_file(name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("neon-pong").join(name))
}

/// Read a JSON value, logging and returning None on any failure
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("malformed file at {}: {err}", path.display());
            None
        }
    }
}

/// Write a value as pretty JSON, creating parent directories
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(path, json)
}
