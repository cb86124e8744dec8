use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use wordsearch_core::render::SvgConfig;
use wordsearch_core::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_SIZE};

/// Persisted defaults for the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_size: usize,
    pub max_attempts: usize,
    /// Pixel size of one grid cell in the SVG output
    pub cell_size: u32,
    /// Filler letters
    pub alphabet: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cell_size: SvgConfig::default().cell_size,
            alphabet: ('A'..='Z').collect(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordsearch")
            .join("settings.json")
    }

    /// Load settings from file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                Self::default()
            }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating settings directory {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            size: self.grid_size,
            max_attempts: self.max_attempts,
            alphabet: self.alphabet.chars().collect(),
        }
    }

    pub fn svg_config(&self) -> SvgConfig {
        SvgConfig::with_cell_size(self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            grid_size: 12,
            max_attempts: 40,
            cell_size: 32,
            alphabet: "XYZ".to_string(),
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "grid_size": 20 }"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.grid_size, 20);
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
