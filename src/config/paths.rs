//! Path resolution for respira configuration files.
//!
//! All respira data is stored in `~/.respira/`:
//! - `config.yaml` - Main configuration file (settings + user techniques)

use std::path::PathBuf;

use crate::error::RespiraError;

/// Paths to respira configuration directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.respira/`
    pub root: PathBuf,
    /// Config file: `~/.respira/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RespiraError> {
        let home = std::env::var("HOME")
            .map_err(|_| RespiraError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".respira");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RespiraError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                RespiraError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".respira"))
        })
    }
}
