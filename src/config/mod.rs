//! Configuration management for respira.
//!
//! This module handles loading and saving configuration from `~/.respira/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, SessionConfig};
