//! Client preferences for notelit
//!
//! The browser client mirrors view preferences into local storage; here
//! they live in a `config.toml` next to the cache file. Missing file
//! means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotelitError, Result};
use crate::view::SortKey;

/// Persisted view preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sort key applied when `--sort` is not given
    pub default_sort: SortKey,
    /// Whether `list` renders the pinned shelf above the main list
    pub pinned_shelf: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Manual,
            pinned_shelf: true,
        }
    }
}

impl Config {
    /// Load preferences from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Write preferences back to the TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw =
            toml::to_string_pretty(self).map_err(|e| NotelitError::Other(e.to_string()))?;
        fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.default_sort, SortKey::Manual);
        assert!(config.pinned_shelf);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            default_sort: SortKey::Newest,
            pinned_shelf: false,
        };
        config.save(&path).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.default_sort, SortKey::Newest);
        assert!(!reloaded.pinned_shelf);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_sort = \"title\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_sort, SortKey::Title);
        assert!(config.pinned_shelf);
    }
}
