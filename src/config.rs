//! Configuration for the maamulat tracker

use crate::domain::Level;
use crate::persistence::{atomic_write, ensure_dir, CONFIG_FILE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tracker configuration, read from `config.toml` in the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the state files live, if not next to this config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Level a brand-new store is seeded with
    #[serde(default)]
    pub default_level: Level,

    /// Reward fardh prayers as prayed in congregation
    #[serde(default = "default_congregation")]
    pub congregation: bool,

    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_congregation() -> bool {
    true
}

fn default_log_filter() -> String {
    "maamulat=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_level: Level::default(),
            congregation: default_congregation(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load `config.toml` from `dir`, defaults if it doesn't exist
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        let with_comments = format!(
            "# maamulat configuration\n\
             # default_level: beginner | intermediate | advanced\n\n\
             {}",
            content
        );

        atomic_write(path, &with_comments)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Directory holding the state files: the configured override, else `dir`
    pub fn state_dir(&self, dir: &Path) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_config_is_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.congregation);
        assert_eq!(config.log_filter, "maamulat=info");
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "default_level = \"advanced\"\ncongregation = false\n",
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_level, Level::Advanced);
        assert!(!config.congregation);
        assert_eq!(config.log_filter, "maamulat=info");
        assert_eq!(config.state_dir(temp_dir.path()), temp_dir.path().to_path_buf());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/maamulat")),
            default_level: Level::Intermediate,
            congregation: false,
            log_filter: "maamulat=debug".to_string(),
        };

        config.save_to(&path).unwrap();
        config.save_to(&path).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("# maamulat configuration"));
        assert_eq!(std::fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.state_dir(temp_dir.path()), PathBuf::from("/srv/maamulat"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "congregation = \"maybe\"").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }
}
