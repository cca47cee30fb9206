//! Error types for the garage service tracker

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Record export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No records to export")]
    EmptyStore,

    #[error("Failed to write {}: {reason}", path.display())]
    IoFailure { path: PathBuf, reason: String },
}

impl ExportError {
    pub fn io_failure(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExportError::IoFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Vehicle not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No vehicle in service")]
    NoActiveSession,

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
