//! Startup settings: window caption, asset paths, playfield size and tick
//! rate. Read once from an optional `pong.toml` next to the binary;
//! immutable for the session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{Config, Params};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub caption: String,
    pub icon: PathBuf,
    pub bounce_sound: PathBuf,
    pub width: u32,
    pub height: u32,
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            caption: "pong".to_string(),
            icon: PathBuf::from("assets/icon.png"),
            bounce_sound: PathBuf::from("assets/bounce.wav"),
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is a fatal
    /// startup error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    /// Core configuration derived from these settings; everything not
    /// exposed in the file keeps its default tuning.
    pub fn to_config(&self) -> Config {
        Config {
            field_width: self.width,
            field_height: self.height,
            tick_rate: self.tick_rate,
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_give_valid_config() {
        let settings = Settings::default();
        assert!(settings.to_config().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("caption = \"my pong\"\ntick_rate = 60\n").unwrap();
        assert_eq!(settings.caption, "my pong");
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.width, 800, "Unset fields fall back to defaults");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Settings, _> = toml::from_str("volume = 3\n");
        assert!(result.is_err(), "Typos in the settings file should not pass silently");
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let settings = Settings::load(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(settings.caption, "pong");
    }
}
