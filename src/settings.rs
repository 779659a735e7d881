//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the executable. Load and save
//! failures are logged and otherwise ignored; defaults always work.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Show remaining buff timers next to the score
    pub show_buff_timers: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Demo mode ===
    /// Seconds of no input on the title screen before the demo pilot
    /// takes over
    pub idle_timeout_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            show_buff_timers: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            mute_on_blur: true,
            idle_timeout_secs: 15.0,
        }
    }
}

impl Settings {
    pub const DEFAULT_PATH: &'static str = "asterfield_settings.json";

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file; failure is logged, not fatal
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {err}", path.display());
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }

    /// Clamp volumes into range after external edits to the file
    pub fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.idle_timeout_secs = self.idle_timeout_secs.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_json() {
        let mut settings = Settings::default();
        settings.master_volume = 0.5;
        settings.show_fps = false;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: Settings = serde_json::from_str(r#"{"master_volume":0.25}"#).unwrap();
        assert_eq!(back.master_volume, 0.25);
        assert!(back.show_fps);
    }

    #[test]
    fn sanitize_clamps_out_of_range_volumes() {
        let mut settings = Settings::default();
        settings.master_volume = 7.0;
        settings.sfx_volume = -1.0;
        settings.sanitize();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let settings = Settings::load("/nonexistent/asterfield_settings.json");
        assert_eq!(settings, Settings::default());
    }
}
