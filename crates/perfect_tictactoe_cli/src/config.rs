//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Presentation settings for an interactive game.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Symbol drawn for the human's marks.
    #[serde(default = "default_human_symbol")]
    human_symbol: String,

    /// Symbol drawn for the computer's marks.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: String,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Whether the computer opens each game.
    #[serde(default)]
    computer_first: bool,
}

fn default_human_symbol() -> String {
    "X".to_string()
}

fn default_computer_symbol() -> String {
    "O".to_string()
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            computer_delay_ms: default_computer_delay_ms(),
            computer_first: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_symbol.trim().is_empty() || self.computer_symbol.trim().is_empty() {
            return Err(ConfigError::new("Symbols must not be blank".to_string()));
        }
        if self.human_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol {:?}",
                self.human_symbol
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, computer_first: bool, delay_ms: Option<u64>) -> Self {
        self.computer_first |= computer_first;
        if let Some(delay) = delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
