//! Guess scoring against a hidden answer
//!
//! Each position of a guess receives one of three verdicts:
//! - Correct (green): the letter sits in the same position in the answer
//! - Present (yellow): the letter occurs elsewhere in the answer
//! - Absent (gray): the letter is not in the answer, or every copy is used up
//!
//! Duplicate letters are resolved in two passes so that each answer slot is
//! matched at most once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single guess position
///
/// Variants are declared weakest first so the derived ordering matches
/// keyboard precedence: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square used for share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// One scored position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterEvaluation {
    pub letter: char,
    pub state: LetterState,
}

/// A guess together with its per-position verdicts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessEvaluation {
    pub guess: String,
    pub evaluations: Vec<LetterEvaluation>,
}

/// Precondition failure when scoring a guess
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    #[error("guess has {guess} letters but answer has {answer}")]
    LengthMismatch { guess: usize, answer: usize },
}

impl GuessEvaluation {
    /// Number of scored positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.evaluations.is_empty()
            && self
                .evaluations
                .iter()
                .all(|e| e.state == LetterState::Correct)
    }

    /// Iterate over the verdicts in position order
    pub fn states(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.evaluations.iter().map(|e| e.state)
    }

    /// Render the verdicts as an emoji row, e.g. "⬛🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states().map(LetterState::to_emoji).collect()
    }
}

impl fmt::Display for GuessEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.to_emoji())
    }
}

/// Score `guess` against `answer`
///
/// Both inputs are uppercased before comparison.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and consume that answer slot
/// 2. Second pass: for each unmarked position take the left-most unconsumed
///    answer slot with the same letter (Present), otherwise Absent
///
/// # Errors
/// Returns [`EvaluateError::LengthMismatch`] if the inputs differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterState};
///
/// let eval = evaluate("trace", "crane").unwrap();
/// assert_eq!(eval.guess, "TRACE");
/// assert_eq!(eval.evaluations[3].state, LetterState::Present);
/// ```
pub fn evaluate(guess: &str, answer: &str) -> Result<GuessEvaluation, EvaluateError> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let answer: Vec<char> = answer.chars().map(|c| c.to_ascii_uppercase()).collect();

    if guess.len() != answer.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let mut states: Vec<Option<LetterState>> = vec![None; guess.len()];
    let mut consumed = vec![false; answer.len()];

    // First pass: greens
    for (i, (g, a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            states[i] = Some(LetterState::Correct);
            consumed[i] = true;
        }
    }

    // Second pass: yellows from whatever is left, left-most slot first
    for (i, &letter) in guess.iter().enumerate() {
        if states[i].is_some() {
            continue;
        }

        let slot = answer
            .iter()
            .enumerate()
            .position(|(j, &a)| !consumed[j] && a == letter);

        states[i] = Some(match slot {
            Some(j) => {
                consumed[j] = true;
                LetterState::Present
            }
            None => LetterState::Absent,
        });
    }

    let evaluations = guess
        .iter()
        .zip(states)
        .map(|(&letter, state)| LetterEvaluation {
            letter,
            state: state.unwrap_or(LetterState::Absent),
        })
        .collect();

    Ok(GuessEvaluation {
        guess: guess.into_iter().collect(),
        evaluations,
    })
}
