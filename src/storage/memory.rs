//! In-process store, handy for tests and throwaway sessions

use super::Store;
use crate::core::GameState;
use crate::error::StoreError;
use crate::stats::GameStats;

/// Keeps snapshots in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub game: Option<GameState>,
    pub stats: Option<GameStats>,
    /// Number of successful `save_stats` calls
    pub stats_writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_game(&self) -> Option<GameState> {
        self.game.clone()
    }

    fn save_game(&mut self, game: &GameState) -> Result<(), StoreError> {
        self.game = Some(game.clone());
        Ok(())
    }

    fn delete_game(&mut self) -> Result<(), StoreError> {
        self.game = None;
        Ok(())
    }

    fn load_stats(&self) -> GameStats {
        self.stats.clone().unwrap_or_default()
    }

    fn save_stats(&mut self, stats: &GameStats) -> Result<(), StoreError> {
        self.stats = Some(stats.clone());
        self.stats_writes += 1;
        Ok(())
    }

    fn delete_stats(&mut self) -> Result<(), StoreError> {
        self.stats = None;
        Ok(())
    }
}
