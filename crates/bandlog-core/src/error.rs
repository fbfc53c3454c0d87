//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while configuring the logging facility
///
/// Logging calls themselves never return errors; write failures are dropped.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Could not open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an IO error for a file target
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for LogError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(format!("invalid YAML: {}", err))
    }
}

impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("invalid JSON: {}", err))
    }
}

pub type LogResult<T> = Result<T, LogError>;
