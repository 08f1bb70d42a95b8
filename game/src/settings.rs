use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const MIN_SCALE: u32 = 1;
pub const MAX_SCALE: u32 = 8;

pub const ENV_MUTE: &str = "POCKET_BLOCKS_MUTE";
pub const ENV_SCALE: &str = "POCKET_BLOCKS_SCALE";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioSettings {
    pub master_volume: f32,
    pub mute: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            mute: false,
        }
    }
}

impl AudioSettings {
    pub fn clamp(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self
    }

    pub fn effective_gain(self) -> f32 {
        if self.mute { 0.0 } else { self.master_volume }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Window size as a multiple of the 160x144 screen.
    pub scale: u32,
    pub vsync: bool,
    /// Bag seed; a random one is picked when absent.
    pub seed: Option<u64>,
    pub audio: AudioSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 3,
            vsync: true,
            seed: None,
            audio: AudioSettings::default(),
        }
    }
}

/// Command-line values that take precedence over every other source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub scale: Option<u32>,
    pub seed: Option<u64>,
    pub mute: bool,
    pub no_vsync: bool,
}

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed reading {}: {source}", path.display())
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        self.audio = self.audio.clamp();
        self
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(text).map(Settings::sanitized)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `POCKET_BLOCKS_*` variables looked up through `var`. Unparseable values are ignored.
    pub fn apply_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mute) = var(ENV_MUTE).as_deref().and_then(parse_bool) {
            self.audio.mute = mute;
        }
        if let Some(scale) = var(ENV_SCALE).and_then(|v| v.trim().parse::<u32>().ok()) {
            self.scale = scale;
        }
        self.sanitized()
    }

    pub fn apply_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(scale) = overrides.scale {
            self.scale = scale;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.mute {
            self.audio.mute = true;
        }
        if overrides.no_vsync {
            self.vsync = false;
        }
        self.sanitized()
    }

    /// Defaults, then the optional config file, then the process environment, then `overrides`.
    pub fn resolve(
        config: Option<&Path>,
        overrides: SettingsOverrides,
    ) -> Result<Self, SettingsError> {
        let base = match config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base
            .apply_env(|name| std::env::var(name).ok())
            .apply_overrides(overrides))
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_defaults_fill_missing_fields() {
        let parsed = Settings::from_json(r#"{"audio":{"mute":true}}"#)
            .expect("settings JSON should parse");
        assert_eq!(parsed.scale, 3);
        assert!(parsed.vsync);
        assert_eq!(parsed.seed, None);
        assert!(parsed.audio.mute);
        assert_eq!(parsed.audio.master_volume, 1.0);
    }

    #[test]
    fn sanitized_clamps_scale_and_volume() {
        let parsed = Settings::from_json(r#"{"scale":40,"audio":{"master_volume":-1.0}}"#)
            .expect("settings JSON should parse");
        assert_eq!(parsed.scale, MAX_SCALE);
        assert_eq!(parsed.audio.master_volume, 0.0);

        let zero = Settings {
            scale: 0,
            ..Settings::default()
        }
        .sanitized();
        assert_eq!(zero.scale, MIN_SCALE);
    }

    #[test]
    fn env_overrides_file_values() {
        let settings = Settings::default().apply_env(|name| match name {
            ENV_MUTE => Some("yes".to_string()),
            ENV_SCALE => Some("5".to_string()),
            _ => None,
        });
        assert!(settings.audio.mute);
        assert_eq!(settings.scale, 5);
    }

    #[test]
    fn garbage_env_values_are_ignored() {
        let settings = Settings::default().apply_env(|name| match name {
            ENV_MUTE => Some("maybe".to_string()),
            ENV_SCALE => Some("big".to_string()),
            _ => None,
        });
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn command_line_wins() {
        let settings = Settings::default()
            .apply_env(|name| (name == ENV_SCALE).then(|| "2".to_string()))
            .apply_overrides(SettingsOverrides {
                scale: Some(4),
                seed: Some(99),
                mute: true,
                no_vsync: true,
            });
        assert_eq!(settings.scale, 4);
        assert_eq!(settings.seed, Some(99));
        assert!(settings.audio.mute);
        assert!(!settings.vsync);
        assert_eq!(settings.audio.effective_gain(), 0.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Settings::load(Path::new("/definitely/not/here.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }
}
