//! Persisted user preferences - the watched region and page size

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// DKI JAKARTA, the portal's busiest region.
pub const DEFAULT_REGION_ID: u32 = 31;

const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Region to query when the CLI gets no `--region` override.
    pub region_id: u32,

    /// Locations per page in the text renderer.
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region_id: DEFAULT_REGION_ID,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// Load from the platform config directory, falling back to defaults on
    /// any failure. A broken settings file must never stop a query.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no config directory available, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|text| {
            toml::from_str(&text).map_err(anyhow::Error::from)
        }) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("failed to read settings from {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let text = toml::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "kaskel-monitor")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let settings = Settings {
            region_id: 51,
            page_size: 10,
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.region_id, 51);
        assert_eq!(loaded.page_size, 10);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("nope.toml"));
        assert_eq!(loaded.region_id, DEFAULT_REGION_ID);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "region_id = \"not a number\"").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.region_id, DEFAULT_REGION_ID);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "region_id = 35").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.region_id, 35);
        assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
    }
}
