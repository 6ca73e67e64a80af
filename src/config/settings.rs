//! Configuration settings for respira.
//!
//! Settings are loaded from `~/.respira/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::engine::Technique;
use crate::error::RespiraError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session settings.
    pub session: SessionConfig,
    /// User-defined techniques, appended to the built-in catalog.
    pub techniques: Vec<Technique>,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Technique to preselect when none is named on the command line.
    #[serde(default)]
    pub default_technique: Option<String>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_technique: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, RespiraError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if a user-defined technique is invalid.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, RespiraError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RespiraError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            RespiraError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        for technique in &config.techniques {
            technique.validate()?;
        }

        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), RespiraError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), RespiraError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| RespiraError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            RespiraError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The full technique catalog: built-ins followed by user techniques.
    #[must_use]
    pub fn catalog(&self) -> Vec<Technique> {
        let mut catalog = crate::engine::builtin_catalog();
        catalog.extend(self.techniques.iter().cloned());
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp_dir.path().join("config.yaml")).unwrap();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert!(config.techniques.is_empty());
        assert_eq!(config.catalog().len(), 3);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.session.default_technique = Some("Four Directions".to_string());
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(
            loaded.session.default_technique.as_deref(),
            Some("Four Directions")
        );
    }

    #[test]
    fn test_user_techniques_extend_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r"
techniques:
  - name: Coherent
    description: Five-five breathing
    pattern: [5, 0, 5, 0]
    instructions: ['Breathe in', '', 'Breathe out', '']
    cycles: 10
",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[3].name, "Coherent");
    }

    #[test]
    fn test_invalid_user_technique_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r"
techniques:
  - name: Broken
    description: Zero cycles
    pattern: [4, 4, 4, 4]
    instructions: ['a', 'b', 'c', 'd']
    cycles: 0
",
        )
        .unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
