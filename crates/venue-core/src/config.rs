//! User configuration
//!
//! Read from `~/.venues/config.toml` when present. Every key is optional;
//! command-line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::config::DEFAULT_THEME;
use crate::error::ConfigError;
use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name
    pub theme: String,
    /// JSON region catalog replacing the built-in list
    pub regions_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            regions_file: None,
        }
    }
}

impl Config {
    /// Load from the default location
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&paths::config_file())
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), theme = %config.theme, "Loaded config");
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, theme: Option<String>, regions_file: Option<PathBuf>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if regions_file.is_some() {
            self.regions_file = regions_file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, "venues");
    }

    #[test]
    fn test_parses_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"paper\"").unwrap();
        writeln!(file, "regions_file = \"/tmp/regions.json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.theme, "paper");
        assert_eq!(config.regions_file, Some(PathBuf::from("/tmp/regions.json")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "regions_file = \"r.json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.theme, "venues");
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = ").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_overrides(Some("midnight".into()), Some(PathBuf::from("x.json")));
        assert_eq!(config.theme, "midnight");
        assert_eq!(config.regions_file, Some(PathBuf::from("x.json")));

        let untouched = Config::default().with_overrides(None, None);
        assert_eq!(untouched, Config::default());
    }
}
