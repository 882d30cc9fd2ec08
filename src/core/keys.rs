//! Keyboard hint aggregation
//!
//! Folds successive guess evaluations into the best-known state per letter.

use super::evaluation::{GuessEvaluation, LetterState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best-known state for each letter seen so far
///
/// Update rules per scored letter:
/// - an entry already at Correct is never touched
/// - Correct always wins
/// - Present replaces anything that is not already Present
/// - Absent is written only for a letter with no entry yet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyStatusMap(BTreeMap<char, LetterState>);

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State recorded for `letter`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterState> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(letter, state)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.0.iter().map(|(&c, &s)| (c, s))
    }

    /// Return a copy with `evaluation` folded in
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{evaluate, KeyStatusMap, LetterState};
    ///
    /// let keys = KeyStatusMap::new().fold(&evaluate("TRACE", "CRANE").unwrap());
    /// assert_eq!(keys.get('C'), Some(LetterState::Present));
    /// assert_eq!(keys.get('T'), Some(LetterState::Absent));
    /// assert_eq!(keys.get('Z'), None);
    /// ```
    #[must_use]
    pub fn fold(&self, evaluation: &GuessEvaluation) -> Self {
        let mut next = self.clone();
        for e in &evaluation.evaluations {
            next.apply(e.letter, e.state);
        }
        next
    }

    fn apply(&mut self, letter: char, state: LetterState) {
        let current = self.0.get(&letter).copied();
        match (current, state) {
            (Some(LetterState::Correct), _) => {}
            (_, LetterState::Correct) => {
                self.0.insert(letter, LetterState::Correct);
            }
            (current, LetterState::Present) if current != Some(LetterState::Present) => {
                self.0.insert(letter, LetterState::Present);
            }
            (None, LetterState::Absent) => {
                self.0.insert(letter, LetterState::Absent);
            }
            _ => {}
        }
    }
}
