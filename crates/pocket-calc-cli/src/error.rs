//! Error types for the CLI

use pocket_calc::config::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key label that maps to no button
    #[error("Unknown key: {key:?} (expected 0-9, ., + − × ÷, =, AC, DEL, +/-)")]
    UnknownKey {
        /// The offending label
        key: String,
    },

    /// Snapshot serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
