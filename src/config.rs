//! On-disk app configuration. The theme and the decorative background density
//! are explicit values handed to rendering collaborators; nothing in the
//! aggregation core reads them.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppTheme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: AppTheme,
    /// Particle density for the animated background, 0.0 (off) to 1.0.
    pub background_density: f32,
    /// Snapshot to load when the CLI is given no path argument.
    pub entries_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: AppTheme::System,
            background_density: 0.5,
            entries_path: None,
        }
    }
}

impl AppConfig {
    /// `MOODLOG_CONFIG_DIR` overrides the platform config directory.
    fn config_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("MOODLOG_CONFIG_DIR") {
            if !dir.trim().is_empty() {
                return Some(PathBuf::from(dir).join("config.toml"));
            }
        }
        dirs::config_dir().map(|dir| dir.join("moodlog").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing or
    /// malformed. Loading never fails; a bad file only costs a warning.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!("ignoring malformed config {}: {}", path.display(), error);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("no config directory on this platform")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_follows_the_system() {
        let config = AppConfig::default();
        assert_eq!(config.theme, AppTheme::System);
        assert_eq!(config.background_density, 0.5);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            theme: AppTheme::Dark,
            background_density: 0.25,
            entries_path: Some(PathBuf::from("/tmp/entries.json")),
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<AppConfig>(&raw).unwrap(), config);
    }

    #[test]
    fn save_then_load_uses_the_override_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("MOODLOG_CONFIG_DIR", dir.path());

        let config = AppConfig {
            theme: AppTheme::Light,
            background_density: 1.0,
            entries_path: None,
        };
        config.save().unwrap();
        assert_eq!(AppConfig::load(), config);

        std::env::remove_var("MOODLOG_CONFIG_DIR");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(config.theme, AppTheme::Dark);
        assert_eq!(config.background_density, 0.5);
    }
}
