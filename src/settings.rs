//! Player-facing settings, persisted between sessions
//!
//! Loading is forgiving: a missing or malformed file falls back to defaults
//! with a log line instead of failing startup. Saving propagates errors so
//! the shell can decide what to do about them.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_VOLUME_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound volume on the 0..=MAX_VOLUME_SCALE bar
    pub volume_scale: u8,
    /// Applied at window creation, so a toggle takes effect after restart
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume_scale: 3,
            fullscreen: false,
        }
    }
}

impl Settings {
    /// Nudge the volume by one step, saturating at the ends of the bar
    pub fn step_volume(&mut self, delta: i8) {
        let stepped = self.volume_scale as i8 + delta;
        self.volume_scale = stepped.clamp(0, MAX_VOLUME_SCALE as i8) as u8;
    }

    /// Clamp values that a hand-edited file may have pushed out of range
    fn sanitized(mut self) -> Self {
        self.volume_scale = self.volume_scale.min(MAX_VOLUME_SCALE);
        self
    }

    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => settings.sanitized(),
                Err(error) => {
                    log::warn!("malformed settings file {}: {error}", path.display());
                    Self::default()
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(error) => {
                log::warn!("could not read settings {}: {error}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_saturates_at_both_ends() {
        let mut settings = Settings::default();
        for _ in 0..10 {
            settings.step_volume(1);
        }
        assert_eq!(settings.volume_scale, MAX_VOLUME_SCALE);
        for _ in 0..10 {
            settings.step_volume(-1);
        }
        assert_eq!(settings.volume_scale, 0);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let settings = Settings {
            volume_scale: 1,
            fullscreen: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let back: Settings = serde_json::from_str(r#"{"fullscreen":true}"#).unwrap();
        assert_eq!(back.volume_scale, Settings::default().volume_scale);
        assert!(back.fullscreen);
    }

    #[test]
    fn test_out_of_range_volume_is_sanitized() {
        let back: Settings = serde_json::from_str(r#"{"volume_scale":200}"#).unwrap();
        assert_eq!(back.sanitized().volume_scale, MAX_VOLUME_SCALE);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loaded = Settings::load(Path::new("definitely-not-here/settings.json"));
        assert_eq!(loaded, Settings::default());
    }
}
