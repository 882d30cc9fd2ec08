//! JSON snapshots in a data directory

use super::Store;
use crate::core::GameState;
use crate::error::StoreError;
use crate::stats::GameStats;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const GAME_FILE: &str = "game.json";
const STATS_FILE: &str = "stats.json";

/// Stores `game.json` and `stats.json` under one directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir`, creating it if needed
    ///
    /// # Errors
    /// Returns `StoreError::CreateDir` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read snapshot");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable snapshot");
                None
            }
        }
    }

    /// Write through a temporary file so a crash never leaves half a snapshot
    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(value)?;

        fs::write(&tmp, json)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| StoreError::Write {
                path: path.clone(),
                source: e,
            })?;
        tracing::debug!(path = %path.display(), "saved snapshot");
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "removed snapshot");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Remove { path, source: e }),
        }
    }
}

impl Store for JsonFileStore {
    fn load_game(&self) -> Option<GameState> {
        self.read(GAME_FILE)
    }

    fn save_game(&mut self, game: &GameState) -> Result<(), StoreError> {
        self.write(GAME_FILE, game)
    }

    fn delete_game(&mut self) -> Result<(), StoreError> {
        self.remove(GAME_FILE)
    }

    fn load_stats(&self) -> GameStats {
        self.read(STATS_FILE).unwrap_or_default()
    }

    fn save_stats(&mut self, stats: &GameStats) -> Result<(), StoreError> {
        self.write(STATS_FILE, stats)
    }

    fn delete_stats(&mut self) -> Result<(), StoreError> {
        self.remove(STATS_FILE)
    }
}
