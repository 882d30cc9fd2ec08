//! Non-interactive commands over the saved data

use crate::output::{print_stats, share_text};
use crate::storage::Store;
use anyhow::Result;

/// Print saved statistics, overall or for one word length
pub fn show_stats(store: &impl Store, length: Option<usize>, max_guesses: usize) {
    print_stats(&store.load_stats(), length, max_guesses);
}

/// Share card of the saved game, if it is finished
#[must_use]
pub fn share_last_game(store: &impl Store) -> Option<String> {
    let game = store.load_game()?;
    game.status()
        .is_terminal()
        .then(|| share_text(game.evaluations(), game.max_guesses()))
}

/// Delete the saved game, and the statistics too when asked
///
/// # Errors
///
/// Returns an error if an existing snapshot cannot be removed.
pub fn run_reset(store: &mut impl Store, include_stats: bool) -> Result<()> {
    store.delete_game()?;
    tracing::info!("saved game deleted");
    if include_stats {
        store.delete_stats()?;
        tracing::info!("statistics deleted");
    }
    Ok(())
}
