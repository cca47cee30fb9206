//! Configuration management for the garage tracker
//!
//! Config stored at: ~/.config/garage-tracker/config.json

use std::path::{Path, PathBuf};

use garage_types::{ConfigError, ExportFormat, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format used when an export path has no extension
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Export directory override
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Default console output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::Xlsx,
            export_dir: None,
            output_format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("garage-tracker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory exports are written to when no explicit path is given
    pub fn export_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.export_dir {
            return dir.clone();
        }
        dirs::document_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        })
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Garage Tracker Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Export format:  {}", self.export_format)?;
        writeln!(f, "Export dir:     {}", self.export_dir().display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
