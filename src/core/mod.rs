//! Core game engine
//!
//! Pure scoring, keyboard aggregation and the game state machine. Nothing in
//! here performs I/O; every operation takes a value and returns a value.

mod evaluation;
mod game;
mod keys;

pub use evaluation::{EvaluateError, GuessEvaluation, LetterEvaluation, LetterState, evaluate};
pub use game::{
    GameOutcome, GameResult, GameState, GameStatus, MAX_WORD_LENGTH, MIN_WORD_LENGTH,
    SubmitFeedback,
};
pub use keys::KeyStatusMap;
