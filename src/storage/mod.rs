//! Persistence of game and statistics snapshots
//!
//! The session talks to a [`Store`]; the binary uses [`JsonFileStore`] and
//! tests use [`MemoryStore`]. Loading never fails: a missing or unreadable
//! snapshot is treated as absent and logged.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::GameState;
use crate::error::StoreError;
use crate::stats::GameStats;

/// Snapshot storage for the current game and the statistics
pub trait Store {
    /// Saved game, if one exists and can be read
    fn load_game(&self) -> Option<GameState>;

    /// Overwrite the saved game
    ///
    /// # Errors
    /// Returns `StoreError` if the snapshot cannot be written.
    fn save_game(&mut self, game: &GameState) -> Result<(), StoreError>;

    /// Forget the saved game
    ///
    /// # Errors
    /// Returns `StoreError` if an existing snapshot cannot be removed.
    fn delete_game(&mut self) -> Result<(), StoreError>;

    /// Saved statistics, or defaults
    fn load_stats(&self) -> GameStats;

    /// Overwrite the saved statistics
    ///
    /// # Errors
    /// Returns `StoreError` if the snapshot cannot be written.
    fn save_stats(&mut self, stats: &GameStats) -> Result<(), StoreError>;

    /// Forget the saved statistics
    ///
    /// # Errors
    /// Returns `StoreError` if an existing snapshot cannot be removed.
    fn delete_stats(&mut self) -> Result<(), StoreError>;
}
