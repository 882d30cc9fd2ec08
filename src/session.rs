//! Play session
//!
//! Wires the pure game engine to a word source, a snapshot store and the
//! statistics recorder. Front ends (TUI and line mode) drive a `Session`
//! and render its state; they never touch the store directly.

use crate::core::{GameOutcome, GameState, MAX_WORD_LENGTH, MIN_WORD_LENGTH, SubmitFeedback};
use crate::error::SessionError;
use crate::stats::{GameStats, StatsRecorder};
use crate::storage::Store;
use crate::wordlists::WordSource;
use chrono::{DateTime, Utc};

/// Word length and guess budget of a fresh session after a reset
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// What happened when the player pressed enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterResult {
    /// Rejected; the message explains why
    Rejected(SubmitFeedback),
    /// Scored, game continues
    Scored,
    /// Scored and the game is over
    Finished(GameOutcome),
}

/// One player's game plus everything it persists to
pub struct Session<W, S> {
    words: W,
    store: S,
    recorder: StatsRecorder,
    clock: fn() -> DateTime<Utc>,
    state: GameState,
    stats: GameStats,
}

impl<W: WordSource, S: Store> Session<W, S> {
    /// Resume the saved game if it is still in progress, otherwise start a
    /// new one with the given configuration
    ///
    /// # Errors
    /// Returns `SessionError` if a new game is needed and cannot be started.
    pub fn load_or_create(
        words: W,
        store: S,
        recorder: StatsRecorder,
        word_length: usize,
        max_guesses: usize,
    ) -> Result<Self, SessionError> {
        Self::open(words, store, recorder, word_length, max_guesses, false)
    }

    /// Like [`Session::load_or_create`], but a saved game is only resumed if
    /// it was started with exactly this configuration
    ///
    /// # Errors
    /// Returns `SessionError` if a new game is needed and cannot be started.
    pub fn load_or_create_matching(
        words: W,
        store: S,
        recorder: StatsRecorder,
        word_length: usize,
        max_guesses: usize,
    ) -> Result<Self, SessionError> {
        Self::open(words, store, recorder, word_length, max_guesses, true)
    }

    fn open(
        words: W,
        store: S,
        recorder: StatsRecorder,
        word_length: usize,
        max_guesses: usize,
        require_match: bool,
    ) -> Result<Self, SessionError> {
        let stats = store.load_stats();
        let saved = store
            .load_game()
            .filter(|g| !g.status().is_terminal() && is_consistent(g))
            .filter(|g| {
                !require_match
                    || (g.word_length() == word_length && g.max_guesses() == max_guesses)
            });

        let mut session = Self {
            words,
            store,
            recorder,
            clock: Utc::now,
            state: GameState::default(),
            stats,
        };

        match saved {
            Some(game) => {
                tracing::info!(
                    word_length = game.word_length(),
                    guesses = game.guesses_used(),
                    "resuming saved game"
                );
                session.state = game;
            }
            None => session.start(word_length, max_guesses)?,
        }
        Ok(session)
    }

    /// Replace the clock used to timestamp finished games
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Type a letter into the current row; non-letters are ignored
    pub fn type_letter(&mut self, letter: char) {
        if letter.is_ascii_alphabetic() {
            let next = self.state.add_letter(letter);
            self.transition(next);
        }
    }

    /// Delete the last letter of the current row
    pub fn backspace(&mut self) {
        let next = self.state.remove_letter();
        self.transition(next);
    }

    /// Replace the current row with `word` (for line-based input)
    pub fn set_guess(&mut self, word: &str) {
        let mut next = self.state.clone();
        while !next.current_guess().is_empty() {
            next = next.remove_letter();
        }
        for letter in word.chars().filter(char::is_ascii_alphabetic) {
            next = next.add_letter(letter);
        }
        self.transition(next);
    }

    /// Submit the current row
    pub fn enter(&mut self) -> EnterResult {
        let length = self.state.word_length();
        let words = &self.words;
        let feedback = self
            .state
            .submit_feedback(|w| words.is_valid_word(w, length));
        if feedback != SubmitFeedback::Accepted {
            tracing::debug!(?feedback, guess = self.state.current_guess(), "guess rejected");
            return EnterResult::Rejected(feedback);
        }

        let next = self
            .state
            .submit_guess(|w| words.is_valid_word(w, length));
        self.transition(next);

        match self.record_outcome() {
            Some(outcome) => EnterResult::Finished(outcome),
            None if self.state.status().is_terminal() => {
                // duplicate suppressed by the recorder; still finished
                self.state
                    .outcome()
                    .map_or(EnterResult::Scored, EnterResult::Finished)
            }
            None => EnterResult::Scored,
        }
    }

    /// Record the current game's outcome if it is over
    ///
    /// Safe to call repeatedly: the recorder ignores a repeat of the same
    /// answer inside its dedupe window. Returns the outcome when it was
    /// counted.
    pub fn record_outcome(&mut self) -> Option<GameOutcome> {
        let outcome = self.state.outcome()?;
        let now = (self.clock)();
        let updated = self.recorder.record(&self.stats, &outcome, now)?;
        self.stats = updated;
        if let Err(e) = self.store.save_stats(&self.stats) {
            tracing::error!(error = %e, "failed to save stats");
        }
        Some(outcome)
    }

    /// Start a new game with the current configuration
    ///
    /// # Errors
    /// Returns `SessionError::NoWords` if no answer can be picked.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        self.start(self.state.word_length(), self.state.max_guesses())
    }

    /// Start a new game with a different configuration
    ///
    /// # Errors
    /// Returns `SessionError` if the length is unsupported or has no words.
    pub fn change_settings(
        &mut self,
        word_length: usize,
        max_guesses: usize,
    ) -> Result<(), SessionError> {
        self.start(word_length, max_guesses)
    }

    /// Delete the saved game and start over with the default configuration
    ///
    /// # Errors
    /// Returns `SessionError` if the default game cannot be started.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if let Err(e) = self.store.delete_game() {
            tracing::error!(error = %e, "failed to delete saved game");
        }
        self.start(DEFAULT_WORD_LENGTH, DEFAULT_MAX_GUESSES)
    }

    /// Wipe all statistics
    pub fn reset_stats(&mut self) {
        if let Err(e) = self.store.delete_stats() {
            tracing::error!(error = %e, "failed to delete stats");
        }
        self.stats = GameStats::default();
    }

    fn start(&mut self, word_length: usize, max_guesses: usize) -> Result<(), SessionError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(SessionError::UnsupportedLength(word_length));
        }
        let answer = self
            .words
            .random_word(word_length)
            .ok_or(SessionError::NoWords(word_length))?;

        tracing::info!(word_length, max_guesses, "starting new game");
        self.transition(GameState::new(word_length, max_guesses, &answer));
        Ok(())
    }

    fn transition(&mut self, next: GameState) {
        if next == self.state {
            return;
        }
        self.state = next;
        if let Err(e) = self.store.save_game(&self.state) {
            tracing::error!(error = %e, "failed to save game");
        }
    }
}

/// A saved game is only resumed if its shape still makes sense
fn is_consistent(game: &GameState) -> bool {
    let length = game.word_length();
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length)
        && game.answer().len() == length
        && game.guesses().len() == game.evaluations().len()
        && game.guesses().len() < game.max_guesses()
        && game.current_len() <= length
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameResult, GameStatus};
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    /// Always answers with the first word of its list
    struct FixedWords {
        answer: String,
        valid: Vec<String>,
    }

    impl FixedWords {
        fn new(answer: &str, valid: &[&str]) -> Self {
            Self {
                answer: answer.to_string(),
                valid: valid.iter().map(|w| w.to_string()).collect(),
            }
        }
    }

    impl WordSource for FixedWords {
        fn is_valid_word(&self, word: &str, length: usize) -> bool {
            word.len() == length && (word == self.answer || self.valid.iter().any(|v| v == word))
        }

        fn random_word(&mut self, length: usize) -> Option<String> {
            (self.answer.len() == length).then(|| self.answer.clone())
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn session(answer: &str) -> Session<FixedWords, MemoryStore> {
        let words = FixedWords::new(
            answer,
            &["SLATE", "TRACE", "BOUND", "PIXEL", "MOUTH", "GRAND"],
        );
        Session::load_or_create(words, MemoryStore::new(), StatsRecorder::default(), 5, 6)
            .unwrap()
            .with_clock(fixed_now)
    }

    fn guess(session: &mut Session<FixedWords, MemoryStore>, word: &str) -> EnterResult {
        for c in word.chars() {
            session.type_letter(c);
        }
        session.enter()
    }

    #[test]
    fn new_session_starts_and_saves_a_game() {
        let session = session("CRANE");
        assert_eq!(session.state().answer(), "CRANE");
        assert_eq!(session.store().game.as_ref(), Some(session.state()));
    }

    #[test]
    fn typing_is_saved_after_every_change() {
        let mut session = session("CRANE");
        session.type_letter('t');
        session.type_letter('7');
        assert_eq!(session.store().game.as_ref().unwrap().current_guess(), "T");
        session.backspace();
        assert_eq!(session.store().game.as_ref().unwrap().current_guess(), "");
    }

    #[test]
    fn enter_reports_rejections() {
        let mut session = session("CRANE");
        assert_eq!(
            guess(&mut session, "CRA"),
            EnterResult::Rejected(SubmitFeedback::NotEnoughLetters)
        );
        session.set_guess("");
        assert_eq!(
            guess(&mut session, "XXXXX"),
            EnterResult::Rejected(SubmitFeedback::NotInWordList)
        );
        assert!(session.state().guesses().is_empty());
    }

    #[test]
    fn first_try_win_records_stats_once() {
        let mut session = session("CRANE");
        let result = guess(&mut session, "crane");
        let EnterResult::Finished(outcome) = result else {
            panic!("expected a finished game, got {result:?}");
        };
        assert_eq!(outcome.result, GameResult::Won);
        assert_eq!(outcome.guesses_used, 1);

        // terminal event delivered again, e.g. by a re-render
        assert_eq!(session.record_outcome(), None);
        assert_eq!(session.record_outcome(), None);

        let five = session.stats().for_length(5);
        assert_eq!(five.wins, 1);
        assert_eq!(five.games_played, 1);
        assert_eq!(five.wins_with(1), 1);
        assert_eq!(session.store().stats_writes, 1);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut session = session("CRANE");
        for word in ["SLATE", "TRACE", "BOUND", "PIXEL", "MOUTH"] {
            assert_eq!(guess(&mut session, word), EnterResult::Scored);
        }
        let result = guess(&mut session, "GRAND");
        assert!(matches!(result, EnterResult::Finished(ref o) if o.result == GameResult::Lost));
        assert_eq!(session.state().status(), GameStatus::Lost);
        assert_eq!(session.state().guesses().len(), 6);
        assert_eq!(session.stats().for_length(5).current_streak, 0);
        assert_eq!(
            guess(&mut session, "CRANE"),
            EnterResult::Rejected(SubmitFeedback::GameOver)
        );
    }

    #[test]
    fn resumes_game_in_progress() {
        let mut first = session("CRANE");
        guess(&mut first, "SLATE");
        let store = first.store().clone();

        let words = FixedWords::new("PIXEL", &[]);
        let resumed =
            Session::load_or_create(words, store, StatsRecorder::default(), 5, 6).unwrap();
        assert_eq!(resumed.state().answer(), "CRANE");
        assert_eq!(resumed.state().guesses(), ["SLATE"]);
    }

    #[test]
    fn game_after_settings_change_is_resumed_with_defaults() {
        let mut first = session("CRANE");
        first.change_settings(5, 8).unwrap();
        guess(&mut first, "SLATE");
        let store = first.store().clone();

        let words = FixedWords::new("PIXEL", &[]);
        let resumed =
            Session::load_or_create(words, store, StatsRecorder::default(), 5, 6).unwrap();
        assert_eq!(resumed.state().answer(), "CRANE");
        assert_eq!(resumed.state().max_guesses(), 8);
        assert_eq!(resumed.state().guesses(), ["SLATE"]);
    }

    #[test]
    fn explicit_configuration_starts_fresh() {
        let mut first = session("CRANE");
        guess(&mut first, "SLATE");
        let store = first.store().clone();

        let words = FixedWords::new("PIXEL", &[]);
        let next =
            Session::load_or_create_matching(words, store, StatsRecorder::default(), 5, 8)
                .unwrap();
        assert_eq!(next.state().answer(), "PIXEL");
        assert_eq!(next.state().max_guesses(), 8);
    }

    #[test]
    fn explicit_configuration_resumes_matching_game() {
        let mut first = session("CRANE");
        guess(&mut first, "SLATE");
        let store = first.store().clone();

        let words = FixedWords::new("PIXEL", &[]);
        let next =
            Session::load_or_create_matching(words, store, StatsRecorder::default(), 5, 6)
                .unwrap();
        assert_eq!(next.state().answer(), "CRANE");
    }

    #[test]
    fn finished_game_is_not_resumed() {
        let mut first = session("CRANE");
        guess(&mut first, "CRANE");
        let store = first.store().clone();

        let words = FixedWords::new("PIXEL", &[]);
        let next = Session::load_or_create(words, store, StatsRecorder::default(), 5, 6).unwrap();
        assert_eq!(next.state().answer(), "PIXEL");
        assert_eq!(next.stats().for_length(5).wins, 1);
    }

    #[test]
    fn inconsistent_snapshot_is_replaced() {
        let mut store = MemoryStore::new();
        store.game = Some(GameState::new(5, 6, "TOOLONG"));
        let words = FixedWords::new("CRANE", &[]);
        let session = Session::load_or_create(words, store, StatsRecorder::default(), 5, 6).unwrap();
        assert_eq!(session.state().answer(), "CRANE");
    }

    #[test]
    fn change_settings_and_reset() {
        let mut session = session("CRANE");
        assert!(matches!(
            session.change_settings(7, 6),
            Err(SessionError::NoWords(7))
        ));
        assert!(matches!(
            session.change_settings(9, 6),
            Err(SessionError::UnsupportedLength(9))
        ));
        session.change_settings(5, 4).unwrap();
        assert_eq!(session.state().max_guesses(), 4);

        session.type_letter('A');
        session.reset().unwrap();
        assert_eq!(session.state().max_guesses(), DEFAULT_MAX_GUESSES);
        assert_eq!(session.state().current_guess(), "");
    }

    #[test]
    fn reset_stats_clears_store() {
        let mut session = session("CRANE");
        guess(&mut session, "CRANE");
        assert!(session.store().stats.is_some());
        session.reset_stats();
        assert!(session.store().stats.is_none());
        assert_eq!(session.stats(), &GameStats::default());
    }
}
