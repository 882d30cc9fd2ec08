//! Folding finished games into statistics
//!
//! A repeat of the same answer inside the dedupe window is ignored, so a
//! terminal event delivered twice is only counted once.

use super::GameStats;
use crate::core::GameOutcome;
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Applies game outcomes to statistics with an idempotence guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRecorder {
    dedupe_window: TimeDelta,
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl StatsRecorder {
    #[must_use]
    pub fn new(dedupe_window: Duration) -> Self {
        Self {
            dedupe_window: TimeDelta::from_std(dedupe_window).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Whether `outcome` repeats the last recorded game
    #[must_use]
    pub fn is_duplicate(&self, stats: &GameStats, outcome: &GameOutcome, now: DateTime<Utc>) -> bool {
        let last = &stats.overall;
        last.last_answer.as_deref() == Some(outcome.answer.as_str())
            && last
                .last_completed_at
                .is_some_and(|at| now.signed_duration_since(at) < self.dedupe_window)
    }

    /// Return `stats` with `outcome` applied, or `None` for a duplicate
    #[must_use]
    pub fn record(
        &self,
        stats: &GameStats,
        outcome: &GameOutcome,
        now: DateTime<Utc>,
    ) -> Option<GameStats> {
        if self.is_duplicate(stats, outcome, now) {
            tracing::debug!(answer = %outcome.answer, "ignoring repeated outcome");
            return None;
        }

        let mut next = stats.clone();
        next.apply(
            outcome.result,
            outcome.guesses_used,
            &outcome.answer,
            outcome.word_length,
            now,
        );
        tracing::info!(
            result = ?outcome.result,
            guesses = outcome.guesses_used,
            word_length = outcome.word_length,
            "recorded game"
        );
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameResult, GameState};
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn first_try_win() -> GameOutcome {
        let state = "CRANE"
            .chars()
            .fold(GameState::new(5, 6, "CRANE"), |s, c| s.add_letter(c))
            .submit_guess(|_| true);
        state.outcome().unwrap()
    }

    #[test]
    fn first_try_win_counted_once() {
        let recorder = StatsRecorder::default();
        let outcome = first_try_win();

        let stats = recorder.record(&GameStats::default(), &outcome, at(0)).unwrap();
        assert!(recorder.record(&stats, &outcome, at(1)).is_none());

        let five = stats.for_length(5);
        assert_eq!(five.wins, 1);
        assert_eq!(five.games_played, 1);
        assert_eq!(five.wins_with(1), 1);
        assert_eq!(stats.overall.wins, 1);
    }

    #[test]
    fn same_answer_after_window_counts_again() {
        let recorder = StatsRecorder::new(Duration::from_secs(60));
        let outcome = first_try_win();

        let stats = recorder.record(&GameStats::default(), &outcome, at(0)).unwrap();
        let stats = recorder.record(&stats, &outcome, at(60)).unwrap();
        assert_eq!(stats.for_length(5).wins, 2);
        assert_eq!(stats.for_length(5).current_streak, 2);
    }

    #[test]
    fn different_answer_inside_window_counts() {
        let recorder = StatsRecorder::default();
        let win = first_try_win();
        let loss = GameOutcome {
            result: GameResult::Lost,
            guesses_used: 6,
            answer: "SLATE".to_string(),
            word_length: 5,
            max_guesses: 6,
        };

        let stats = recorder.record(&GameStats::default(), &win, at(0)).unwrap();
        let stats = recorder.record(&stats, &loss, at(5)).unwrap();
        let five = stats.for_length(5);
        assert_eq!(five.games_played, 2);
        assert_eq!(five.wins, 1);
        assert_eq!(five.current_streak, 0);
        assert_eq!(five.best_streak, 1);
        assert_eq!(five.last_result, Some(GameResult::Lost));
    }

    #[test]
    fn input_stats_are_untouched() {
        let recorder = StatsRecorder::default();
        let before = GameStats::default();
        let _ = recorder.record(&before, &first_try_win(), at(0));
        assert_eq!(before, GameStats::default());
    }
}
