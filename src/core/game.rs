//! Game state machine
//!
//! `GameState` is an immutable snapshot. Every transition takes `&self` and
//! returns the next snapshot; a rejected transition returns a value-equal copy.

use super::evaluation::{GuessEvaluation, evaluate};
use super::keys::KeyStatusMap;
use serde::{Deserialize, Serialize};

/// Smallest supported word length
pub const MIN_WORD_LENGTH: usize = 4;
/// Largest supported word length
pub const MAX_WORD_LENGTH: usize = 8;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why a submit would be rejected, or that it would go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFeedback {
    Accepted,
    NotEnoughLetters,
    NotInWordList,
    GameOver,
}

impl SubmitFeedback {
    /// User-facing message for a rejection
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Accepted => None,
            Self::NotEnoughLetters => Some("Not enough letters"),
            Self::NotInWordList => Some("Not a valid word"),
            Self::GameOver => Some("Game is over"),
        }
    }
}

/// Authoritative snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SavedGame")]
pub struct GameState {
    answer: String,
    guesses: Vec<String>,
    evaluations: Vec<GuessEvaluation>,
    current_guess: String,
    status: GameStatus,
    word_length: usize,
    max_guesses: usize,
    key_statuses: KeyStatusMap,
}

/// Persisted form of a game
///
/// Key statuses are derived from the evaluations on load, so snapshots
/// without them (or with stale ones) still get a correct keyboard.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SavedGame {
    answer: String,
    guesses: Vec<String>,
    evaluations: Vec<GuessEvaluation>,
    current_guess: String,
    status: GameStatus,
    word_length: usize,
    max_guesses: usize,
}

impl Default for SavedGame {
    fn default() -> Self {
        Self {
            answer: String::new(),
            guesses: Vec::new(),
            evaluations: Vec::new(),
            current_guess: String::new(),
            status: GameStatus::Playing,
            word_length: 5,
            max_guesses: 6,
        }
    }
}

impl From<SavedGame> for GameState {
    fn from(saved: SavedGame) -> Self {
        let key_statuses = saved
            .evaluations
            .iter()
            .fold(KeyStatusMap::new(), |keys, e| keys.fold(e));
        Self {
            answer: saved.answer,
            guesses: saved.guesses,
            evaluations: saved.evaluations,
            current_guess: saved.current_guess,
            status: saved.status,
            word_length: saved.word_length,
            max_guesses: saved.max_guesses,
            key_statuses,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(5, 6, "")
    }
}

impl GameState {
    /// Start a fresh game
    ///
    /// The answer is uppercased. Its length is expected to equal `word_length`;
    /// the word source guarantees this for answers it hands out.
    #[must_use]
    pub fn new(word_length: usize, max_guesses: usize, answer: &str) -> Self {
        Self {
            answer: answer.to_ascii_uppercase(),
            guesses: Vec::new(),
            evaluations: Vec::new(),
            current_guess: String::new(),
            status: GameStatus::Playing,
            word_length,
            max_guesses,
            key_statuses: KeyStatusMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn evaluations(&self) -> &[GuessEvaluation] {
        &self.evaluations
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn key_statuses(&self) -> &KeyStatusMap {
        &self.key_statuses
    }

    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Letters typed into the staging row so far
    #[inline]
    #[must_use]
    pub fn current_len(&self) -> usize {
        self.current_guess.chars().count()
    }

    /// Append an uppercased letter to the staging row
    ///
    /// No-op when the game is over or the row is full.
    #[must_use]
    pub fn add_letter(&self, letter: char) -> Self {
        if self.status.is_terminal() || self.current_len() >= self.word_length {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_guess.push(letter.to_ascii_uppercase());
        next
    }

    /// Drop the last letter of the staging row
    ///
    /// No-op when the game is over or the row is empty.
    #[must_use]
    pub fn remove_letter(&self) -> Self {
        let mut next = self.clone();
        if !self.status.is_terminal() {
            next.current_guess.pop();
        }
        next
    }

    /// Classify what `submit_guess` would do with the staging row
    pub fn submit_feedback(&self, is_valid_word: impl Fn(&str) -> bool) -> SubmitFeedback {
        if self.status.is_terminal() {
            SubmitFeedback::GameOver
        } else if self.current_len() != self.word_length {
            SubmitFeedback::NotEnoughLetters
        } else if !is_valid_word(&self.current_guess) {
            SubmitFeedback::NotInWordList
        } else {
            SubmitFeedback::Accepted
        }
    }

    /// Score the staging row and advance the game
    ///
    /// Rejected (state returned unchanged) when the game is over, the row is
    /// not full, or `is_valid_word` refuses it. Dictionary membership is the
    /// caller's concern; the predicate receives the uppercased row.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GameState, GameStatus};
    ///
    /// let state = "CRANE"
    ///     .chars()
    ///     .fold(GameState::new(5, 6, "crane"), |s, c| s.add_letter(c));
    /// let state = state.submit_guess(|_| true);
    /// assert_eq!(state.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn submit_guess(&self, is_valid_word: impl Fn(&str) -> bool) -> Self {
        if self.submit_feedback(is_valid_word) != SubmitFeedback::Accepted {
            return self.clone();
        }

        let guess = self.current_guess.to_ascii_uppercase();
        let Ok(evaluation) = evaluate(&guess, &self.answer) else {
            // Answer of the wrong length: nothing can ever be scored
            return self.clone();
        };

        let mut next = self.clone();
        next.key_statuses = self.key_statuses.fold(&evaluation);
        next.guesses.push(guess.clone());
        next.evaluations.push(evaluation);
        next.current_guess.clear();

        next.status = if guess == self.answer {
            GameStatus::Won
        } else if next.guesses.len() >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        next
    }

    /// Terminal outcome of this game, once it has one
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        let result = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => GameResult::Won,
            GameStatus::Lost => GameResult::Lost,
        };

        Some(GameOutcome {
            result,
            guesses_used: self.guesses.len(),
            answer: self.answer.clone(),
            word_length: self.word_length,
            max_guesses: self.max_guesses,
        })
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Won,
    Lost,
}

/// Event payload handed to the statistics recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub result: GameResult,
    pub guesses_used: usize,
    pub answer: String,
    pub word_length: usize,
    pub max_guesses: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    fn type_word(state: &GameState, word: &str) -> GameState {
        word.chars().fold(state.clone(), |s, c| s.add_letter(c))
    }

    fn play(state: &GameState, word: &str) -> GameState {
        type_word(state, word).submit_guess(|_| true)
    }

    #[test]
    fn new_game_is_empty_and_playing() {
        let state = GameState::new(5, 6, "crane");
        assert_eq!(state.answer(), "CRANE");
        assert!(state.guesses().is_empty());
        assert!(state.evaluations().is_empty());
        assert_eq!(state.current_guess(), "");
        assert_eq!(state.status(), GameStatus::Playing);
        assert!(state.key_statuses().is_empty());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn add_letter_uppercases_and_stops_at_word_length() {
        let state = type_word(&GameState::new(4, 6, "ABLE"), "abcdef");
        assert_eq!(state.current_guess(), "ABCD");
    }

    #[test]
    fn remove_letter_pops_and_tolerates_empty() {
        let state = type_word(&GameState::new(5, 6, "CRANE"), "CR");
        let state = state.remove_letter();
        assert_eq!(state.current_guess(), "C");
        let state = state.remove_letter().remove_letter();
        assert_eq!(state.current_guess(), "");
    }

    #[test]
    fn submit_rejects_short_row() {
        let state = type_word(&GameState::new(5, 6, "CRANE"), "CRAN");
        assert_eq!(state.submit_guess(|_| true), state);
        assert_eq!(
            state.submit_feedback(|_| true),
            SubmitFeedback::NotEnoughLetters
        );
    }

    #[test]
    fn submit_rejects_unknown_word() {
        let state = type_word(&GameState::new(5, 6, "CRANE"), "XXXXX");
        assert_eq!(state.submit_guess(|w| w != "XXXXX"), state);
        assert_eq!(
            state.submit_feedback(|w| w != "XXXXX"),
            SubmitFeedback::NotInWordList
        );
        assert_eq!(SubmitFeedback::NotInWordList.message(), Some("Not a valid word"));
    }

    #[test]
    fn predicate_sees_uppercase_row() {
        let state = type_word(&GameState::new(5, 6, "CRANE"), "trace");
        let next = state.submit_guess(|w| w == "TRACE");
        assert_eq!(next.guesses(), ["TRACE"]);
    }

    #[test]
    fn successful_submit_keeps_sequences_parallel() {
        let state = play(&GameState::new(5, 6, "CRANE"), "TRACE");
        assert_eq!(state.guesses().len(), state.evaluations().len());
        assert_eq!(state.current_guess(), "");
        assert_eq!(state.status(), GameStatus::Playing);
        assert_eq!(state.guesses_remaining(), 5);
        assert_eq!(state.evaluations()[0].to_emoji(), "⬛🟩🟩🟨🟩");
        assert_eq!(state.key_statuses().len(), 5);
    }

    #[test]
    fn first_try_win() {
        let state = play(&GameState::new(5, 6, "CRANE"), "CRANE");
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(
            state.outcome(),
            Some(GameOutcome {
                result: GameResult::Won,
                guesses_used: 1,
                answer: "CRANE".to_string(),
                word_length: 5,
                max_guesses: 6,
            })
        );
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut state = GameState::new(5, 6, "CRANE");
        for guess in ["SLATE", "TRACE", "BOUND", "PIXEL", "MOUTH", "GRAND"] {
            assert_eq!(state.status(), GameStatus::Playing);
            state = play(&state, guess);
        }
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.guesses().len(), 6);
        assert_eq!(state.outcome().map(|o| o.result), Some(GameResult::Lost));
    }

    #[test]
    fn win_on_last_guess_is_a_win() {
        let mut state = GameState::new(4, 4, "ABLE");
        for guess in ["BALE", "AXLE", "ACHE"] {
            state = play(&state, guess);
        }
        state = play(&state, "ABLE");
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.guesses_used(), 4);
    }

    #[test]
    fn terminal_state_ignores_everything() {
        let won = play(&GameState::new(5, 6, "CRANE"), "CRANE");
        assert_eq!(won.add_letter('A'), won);
        assert_eq!(won.remove_letter(), won);
        assert_eq!(won.submit_guess(|_| true), won);
        assert_eq!(won.submit_feedback(|_| true), SubmitFeedback::GameOver);
    }

    #[test]
    fn wrong_length_answer_never_scores() {
        let state = type_word(&GameState::new(5, 6, "CRANES"), "CRANE");
        assert_eq!(state.submit_guess(|_| true), state);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let state = type_word(&play(&GameState::new(5, 6, "CRANE"), "TRACE"), "CR");
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"currentGuess\":\"CR\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn old_snapshot_without_key_statuses_loads() {
        let json = r#"{"answer":"CRANE","guesses":[],"evaluations":[],"currentGuess":"","status":"playing","wordLength":5,"maxGuesses":6}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state, GameState::new(5, 6, "CRANE"));
    }

    #[test]
    fn keyboard_is_rebuilt_for_snapshot_with_guesses() {
        let played = play(&play(&GameState::new(5, 6, "CRANE"), "TRACE"), "SLATE");
        let mut json: serde_json::Value = serde_json::to_value(&played).unwrap();
        json.as_object_mut().unwrap().remove("keyStatuses");

        let state: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(state.key_statuses(), played.key_statuses());
        assert_eq!(state.key_statuses().get('T'), Some(LetterState::Absent));
        assert_eq!(state.key_statuses().get('C'), Some(LetterState::Present));
        assert_eq!(state.key_statuses().get('A'), Some(LetterState::Correct));
        assert_eq!(state, played);
    }
}
