//! Error types for the collaborators around the core
//!
//! The core itself only fails on [`crate::core::EvaluateError`]; everything
//! here comes from the file system, configuration, or word lists.

use std::path::PathBuf;

/// Errors from reading or writing persisted snapshots.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from loading word list files.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that stop a session from starting a game.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no words available for length {0}")]
    NoWords(usize),

    #[error("unsupported word length {0} (must be 4-8)")]
    UnsupportedLength(usize),
}
