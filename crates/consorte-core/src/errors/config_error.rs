//! Configuration errors.

use super::error_code::{self, ConsorteErrorCode};

/// Errors loading or parsing engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

impl ConsorteErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
