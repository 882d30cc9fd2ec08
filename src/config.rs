//! Application configuration, loadable from TOML
//!
//! Every field has a default so a partial (or absent) file works.
//! Command-line flags are applied on top with [`AppConfig::with_overrides`].

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fewest guesses a game may allow
pub const MIN_GUESSES: usize = 4;
/// Most guesses a game may allow
pub const MAX_GUESSES: usize = 8;

/// Name of the config file inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub data_dir: PathBuf,
    /// Window in which a repeated outcome for the same answer is ignored
    pub dedupe_window_secs: u64,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub valid_words: Option<PathBuf>,
    pub answer_words: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
            data_dir: default_data_dir(),
            dedupe_window_secs: 60,
            log_level: "warn".to_string(),
            valid_words: None,
            answer_words: None,
        }
    }
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub word_length: Option<usize>,
    pub max_guesses: Option<usize>,
    pub data_dir: Option<PathBuf>,
    pub valid_words: Option<PathBuf>,
    pub answer_words: Option<PathBuf>,
}

/// `$HOME/.wordle_game`, or `./.wordle_game` without a home directory
#[must_use]
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".wordle_game"),
        |home| PathBuf::from(home).join(".wordle_game"),
    )
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns `ConfigError` if an existing file is unreadable or invalid.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides and re-validate.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if an override is out of range.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(length) = overrides.word_length {
            self.word_length = length;
        }
        if let Some(guesses) = overrides.max_guesses {
            self.max_guesses = guesses;
        }
        if let Some(dir) = overrides.data_dir {
            self.data_dir = dir;
        }
        if overrides.valid_words.is_some() {
            self.valid_words = overrides.valid_words;
        }
        if overrides.answer_words.is_some() {
            self.answer_words = overrides.answer_words;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate all fields.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` describing the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(ConfigError::Validation(format!(
                "word_length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            )));
        }
        if !(MIN_GUESSES..=MAX_GUESSES).contains(&self.max_guesses) {
            return Err(ConfigError::Validation(format!(
                "max_guesses must be between {MIN_GUESSES} and {MAX_GUESSES}, got {}",
                self.max_guesses
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn dedupe_window(&self) -> Duration {
        Duration::from_secs(self.dedupe_window_secs)
    }
}
