//! Configuration handling
//!
//! Configuration is stored in `<config dir>/fairagenda/config.toml`. The
//! directory can be overridden with `FAIRAGENDA_CONFIG_DIR`, which also
//! keeps tests hermetic. A missing config is all defaults; an unreadable
//! one degrades to defaults with a warning, matching the posture of the
//! agenda slot.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fair that commands act on when --fair is omitted
    pub default_fair: Option<String>,

    /// Persistent override for the agenda file location
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Resolves the configuration directory
    pub fn dir() -> Result<PathBuf> {
        if let Ok(dir) = env::var("FAIRAGENDA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let dirs = ProjectDirs::from("", "", "fairagenda")
            .context("could not determine a configuration directory")?;
        Ok(dirs.config_dir().to_path_buf())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Loads the configuration, degrading to defaults on any failure.
    /// The second element carries the failure description, if any.
    pub fn load() -> (Config, Option<String>) {
        match Self::try_load() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(format!("{:#}", e))),
        }
    }

    fn try_load() -> Result<Config> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("failed to serialize configuration")?;
        fs::write(&path, text).with_context(|| format!("failed to write config: {}", path.display()))
    }

    /// Default location of the agenda slot when nothing overrides it
    pub fn default_data_file() -> Result<PathBuf> {
        let dirs =
            ProjectDirs::from("", "", "fairagenda").context("could not determine a data directory")?;
        Ok(dirs.data_dir().join("agenda.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let config = Config::default();
        assert!(config.default_fair.is_none());
        assert!(config.data_file.is_none());
    }

    #[test]
    fn toml_roundtrip() {
        let config = Config {
            default_fair: Some("mwc-24".to_string()),
            data_file: Some(PathBuf::from("/tmp/agenda.json")),
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.default_fair.as_deref(), Some("mwc-24"));
        assert_eq!(parsed.data_file, config.data_file);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let parsed: Config = toml::from_str("default_fair = \"ces-24\"\nfuture_knob = 3\n").unwrap();
        assert_eq!(parsed.default_fair.as_deref(), Some("ces-24"));
    }
}
