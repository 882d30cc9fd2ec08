//! Win/loss statistics
//!
//! Counters are kept per word length plus an overall view that every game
//! feeds into. Snapshots tolerate missing fields so older files still load.

mod recorder;

pub use recorder::StatsRecorder;

use crate::core::GameResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters for one word length (or for all of them)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LengthStats {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Guesses used → number of wins with that many guesses
    pub guess_distribution: BTreeMap<usize, u32>,
    pub last_completed_at: Option<DateTime<Utc>>,
    pub last_answer: Option<String>,
    pub last_result: Option<GameResult>,
}

impl LengthStats {
    /// Win percentage rounded to the nearest integer (0 with no games)
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.wins) * 100.0 / f64::from(self.games_played)).round() as u32
    }

    /// Largest guess count with at least one recorded win
    #[must_use]
    pub fn max_guess_count(&self) -> usize {
        self.guess_distribution
            .iter()
            .filter(|&(_, &wins)| wins > 0)
            .map(|(&guesses, _)| guesses)
            .max()
            .unwrap_or(0)
    }

    /// Wins recorded for exactly `guesses` guesses
    #[must_use]
    pub fn wins_with(&self, guesses: usize) -> u32 {
        self.guess_distribution.get(&guesses).copied().unwrap_or(0)
    }

    /// Tallest bar of the distribution, at least 1 for scaling
    #[must_use]
    pub fn max_bar(&self) -> u32 {
        self.guess_distribution.values().copied().max().unwrap_or(0).max(1)
    }

    fn apply(&mut self, result: GameResult, guesses_used: usize, answer: &str, now: DateTime<Utc>) {
        self.games_played += 1;
        match result {
            GameResult::Won => {
                self.wins += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                *self.guess_distribution.entry(guesses_used).or_insert(0) += 1;
            }
            GameResult::Lost => self.current_streak = 0,
        }
        self.last_completed_at = Some(now);
        self.last_answer = Some(answer.to_string());
        self.last_result = Some(result);
    }
}

/// All persisted statistics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    /// Every game regardless of length
    pub overall: LengthStats,
    pub by_word_length: BTreeMap<usize, LengthStats>,
}

impl GameStats {
    /// Counters for `length`, empty if never played
    #[must_use]
    pub fn for_length(&self, length: usize) -> LengthStats {
        self.by_word_length.get(&length).cloned().unwrap_or_default()
    }

    /// Word lengths with at least one completed game, ascending
    #[must_use]
    pub fn available_lengths(&self) -> Vec<usize> {
        self.by_word_length
            .iter()
            .filter(|(_, s)| s.games_played > 0)
            .map(|(&length, _)| length)
            .collect()
    }

    /// Overall counters folded from the per-length ones
    ///
    /// Matches [`GameStats::overall`] for anything recorded by
    /// [`StatsRecorder`], except that streaks here come from the most
    /// recently finished length.
    #[must_use]
    pub fn aggregate(&self) -> LengthStats {
        let mut total = LengthStats::default();
        for stats in self.by_word_length.values() {
            total.games_played += stats.games_played;
            total.wins += stats.wins;
            total.best_streak = total.best_streak.max(stats.best_streak);
            for (&guesses, &wins) in &stats.guess_distribution {
                *total.guess_distribution.entry(guesses).or_insert(0) += wins;
            }
            if stats.last_completed_at > total.last_completed_at {
                total.current_streak = stats.current_streak;
                total.last_completed_at = stats.last_completed_at;
                total.last_answer.clone_from(&stats.last_answer);
                total.last_result = stats.last_result;
            }
        }
        total
    }

    pub(crate) fn apply(
        &mut self,
        result: GameResult,
        guesses_used: usize,
        answer: &str,
        word_length: usize,
        now: DateTime<Utc>,
    ) {
        self.overall.apply(result, guesses_used, answer, now);
        self.by_word_length
            .entry(word_length)
            .or_default()
            .apply(result, guesses_used, answer, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn win_rate_rounds() {
        let stats = LengthStats {
            games_played: 3,
            wins: 2,
            ..LengthStats::default()
        };
        assert_eq!(stats.win_rate(), 67);
        assert_eq!(LengthStats::default().win_rate(), 0);
    }

    #[test]
    fn streaks_and_distribution() {
        let mut stats = GameStats::default();
        stats.apply(GameResult::Won, 3, "CRANE", 5, at(0));
        stats.apply(GameResult::Won, 4, "SLATE", 5, at(100));
        stats.apply(GameResult::Lost, 6, "PIXEL", 5, at(200));
        stats.apply(GameResult::Won, 3, "BOUND", 5, at(300));

        let five = stats.for_length(5);
        assert_eq!(five.games_played, 4);
        assert_eq!(five.wins, 3);
        assert_eq!(five.current_streak, 1);
        assert_eq!(five.best_streak, 2);
        assert_eq!(five.wins_with(3), 2);
        assert_eq!(five.wins_with(4), 1);
        assert_eq!(five.wins_with(6), 0);
        assert_eq!(five.max_guess_count(), 4);
        assert_eq!(five.max_bar(), 2);
        assert_eq!(five.last_answer.as_deref(), Some("BOUND"));
        assert_eq!(five.last_result, Some(GameResult::Won));
    }

    #[test]
    fn lengths_are_tracked_separately() {
        let mut stats = GameStats::default();
        stats.apply(GameResult::Won, 2, "ABLE", 4, at(0));
        stats.apply(GameResult::Lost, 6, "ABSOLUTE", 8, at(10));

        assert_eq!(stats.available_lengths(), vec![4, 8]);
        assert_eq!(stats.for_length(4).wins, 1);
        assert_eq!(stats.for_length(8).wins, 0);
        assert_eq!(stats.for_length(6), LengthStats::default());
        assert_eq!(stats.overall.games_played, 2);
        assert_eq!(stats.overall.current_streak, 0);
    }

    #[test]
    fn aggregate_folds_lengths() {
        let mut stats = GameStats::default();
        stats.apply(GameResult::Won, 2, "ABLE", 4, at(0));
        stats.apply(GameResult::Won, 3, "BAKE", 4, at(5));
        stats.apply(GameResult::Won, 3, "CRANE", 5, at(10));

        let total = stats.aggregate();
        assert_eq!(total.games_played, 3);
        assert_eq!(total.wins, 3);
        assert_eq!(total.wins_with(3), 2);
        assert_eq!(total.best_streak, 2);
        assert_eq!(total.current_streak, 1);
        assert_eq!(total.last_answer.as_deref(), Some("CRANE"));
        assert_eq!(total.guess_distribution, stats.overall.guess_distribution);
    }

    #[test]
    fn partial_snapshot_merges_with_defaults() {
        let json = r#"{"overall":{"gamesPlayed":4,"wins":3}}"#;
        let stats: GameStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.overall.games_played, 4);
        assert_eq!(stats.overall.best_streak, 0);
        assert!(stats.overall.guess_distribution.is_empty());
        assert!(stats.by_word_length.is_empty());
    }

    #[test]
    fn snapshot_round_trips() {
        let mut stats = GameStats::default();
        stats.apply(GameResult::Won, 1, "CRANE", 5, at(0));
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"guessDistribution\":{\"1\":1}"));
        let back: GameStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
