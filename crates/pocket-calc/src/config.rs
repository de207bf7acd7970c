//! Calculator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Display and behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of characters rendered on the display
    pub max_display_length: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_display_length: Self::DEFAULT_MAX_DISPLAY_LENGTH,
        }
    }
}

impl CalculatorConfig {
    /// Display width of the reference keypad
    pub const DEFAULT_MAX_DISPLAY_LENGTH: usize = 12;

    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display width
    #[must_use]
    pub const fn with_max_display_length(mut self, len: usize) -> Self {
        self.max_display_length = len;
        self
    }

    /// Checks that every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_display_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_display_length",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
