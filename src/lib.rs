//! Wordle Game
//!
//! A Wordle engine for 4-8 letter words: guess evaluation with duplicate
//! letter handling, keyboard hints, an immutable game state machine and
//! per-length statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameState, GameStatus, LetterState, evaluate};
//!
//! // Score a guess
//! let evaluation = evaluate("TRACE", "CRANE").unwrap();
//! assert_eq!(evaluation.states().nth(1), Some(LetterState::Correct));
//!
//! // Play a game
//! let state = "CRANE"
//!     .chars()
//!     .fold(GameState::new(5, 6, "CRANE"), |s, c| s.add_letter(c))
//!     .submit_guess(|_| true);
//! assert_eq!(state.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Configuration and errors
pub mod config;
pub mod error;

// Word lists
pub mod wordlists;

// Statistics
pub mod stats;

// Snapshot persistence
pub mod storage;

// Game controller
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
