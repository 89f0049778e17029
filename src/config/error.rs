//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Theme config parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Theme config validation error: {0}")]
    Validation(String),
}
