//! Word source for the game
//!
//! Provides embedded word lists compiled into the binary, optional custom
//! lists loaded from disk, and the [`WordSource`] seam the session uses to
//! validate guesses and pick answers.

mod embedded;
pub mod loader;

pub use embedded::{ANSWER_WORDS, ANSWER_WORDS_COUNT, VALID_WORDS, VALID_WORDS_COUNT};

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::error::WordListError;
use loader::{WordsByLength, group_by_length, load_from_file};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Dictionary collaborator
///
/// Every word returned by [`WordSource::random_word`] must also satisfy
/// [`WordSource::is_valid_word`] for the same length.
pub trait WordSource {
    /// Whether `word` is an accepted guess of `length` letters
    fn is_valid_word(&self, word: &str, length: usize) -> bool;

    /// Pick an answer of `length` letters, or `None` if there are none
    fn random_word(&mut self, length: usize) -> Option<String>;
}

/// Word lists grouped by length with an injected random source
#[derive(Debug, Clone)]
pub struct WordLists<R = StdRng> {
    valid: WordsByLength,
    answers: Vec<Vec<String>>,
    rng: R,
}

impl WordLists<StdRng> {
    /// Embedded lists with an OS-seeded generator
    #[must_use]
    pub fn embedded() -> Self {
        Self::embedded_with_rng(StdRng::from_os_rng())
    }

    /// Embedded lists, optionally overridden per length by files on disk
    ///
    /// Lengths missing from the files keep the embedded words.
    ///
    /// # Errors
    /// Returns `WordListError` if a given file cannot be read.
    pub fn from_files(
        valid_path: Option<&Path>,
        answer_path: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let valid = valid_path.map(load_from_file).transpose()?;
        let answers = answer_path.map(load_from_file).transpose()?;
        Ok(Self::build(
            valid.unwrap_or_default(),
            answers.unwrap_or_default(),
            StdRng::from_os_rng(),
        ))
    }
}

impl<R: Rng> WordLists<R> {
    /// Embedded lists with the given generator
    pub fn embedded_with_rng(rng: R) -> Self {
        Self::build(WordsByLength::default(), WordsByLength::default(), rng)
    }

    /// Build from raw word iterators (any case, any length)
    pub fn from_words<'a, V, A>(valid: V, answers: A, rng: R) -> Self
    where
        V: IntoIterator<Item = &'a str>,
        A: IntoIterator<Item = &'a str>,
    {
        Self::build(group_by_length(valid), group_by_length(answers), rng)
    }

    /// Resolve fallbacks per length and close the answers over the valid set
    ///
    /// For each length: custom answers, else custom valid words, else the
    /// embedded answers. Valid words are custom ones if present, else embedded.
    fn build(mut valid: WordsByLength, mut answers: WordsByLength, rng: R) -> Self {
        let embedded_valid = group_by_length(VALID_WORDS.iter().copied());
        let mut embedded_answers = group_by_length(ANSWER_WORDS.iter().copied());

        let mut by_length = vec![Vec::new(); MAX_WORD_LENGTH + 1];
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            let custom_valid = valid.remove(&length).filter(|s| !s.is_empty());
            let custom_answers = answers.remove(&length).filter(|s| !s.is_empty());

            let (mut valid_set, answer_set) = match (custom_valid, custom_answers) {
                (Some(v), Some(a)) => (v, a),
                (Some(v), None) => {
                    tracing::warn!(length, "no answer words, using valid words as answers");
                    let a = v.clone();
                    (v, a)
                }
                (None, Some(a)) => (embedded_valid.get(&length).cloned().unwrap_or_default(), a),
                (None, None) => (
                    embedded_valid.get(&length).cloned().unwrap_or_default(),
                    embedded_answers.remove(&length).unwrap_or_default(),
                ),
            };

            // Every answer must be guessable
            valid_set.extend(answer_set.iter().cloned());

            let mut answer_list: Vec<String> = answer_set.into_iter().collect();
            answer_list.sort_unstable();
            if answer_list.is_empty() {
                tracing::warn!(length, "no words available for this length");
            }

            by_length[length] = answer_list;
            valid.insert(length, valid_set);
        }

        Self {
            valid,
            answers: by_length,
            rng,
        }
    }

    /// Number of accepted guesses of `length` letters
    #[must_use]
    pub fn valid_count(&self, length: usize) -> usize {
        self.valid.get(&length).map_or(0, |s| s.len())
    }

    /// Number of possible answers of `length` letters
    #[must_use]
    pub fn answer_count(&self, length: usize) -> usize {
        self.answers.get(length).map_or(0, Vec::len)
    }
}

impl<R: Rng> WordSource for WordLists<R> {
    fn is_valid_word(&self, word: &str, length: usize) -> bool {
        word.len() == length
            && self
                .valid
                .get(&length)
                .is_some_and(|s| s.contains(&word.to_ascii_uppercase()))
    }

    fn random_word(&mut self, length: usize) -> Option<String> {
        let answers = self.answers.get(length)?;
        if answers.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..answers.len());
        Some(answers[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> WordLists<StdRng> {
        WordLists::embedded_with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn counts_match_consts() {
        assert_eq!(ANSWER_WORDS.len(), ANSWER_WORDS_COUNT);
        assert_eq!(VALID_WORDS.len(), VALID_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_playable() {
        for &word in VALID_WORDS.iter().chain(ANSWER_WORDS) {
            assert!(loader::normalize(word).is_some(), "'{word}' is not playable");
        }
    }

    #[test]
    fn every_length_has_answers() {
        let words = seeded();
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            assert!(words.answer_count(length) > 100, "too few {length}-letter answers");
            assert!(words.valid_count(length) >= words.answer_count(length));
        }
    }

    #[test]
    fn validity_is_case_insensitive_and_length_checked() {
        let words = seeded();
        assert!(words.is_valid_word("crane", 5));
        assert!(words.is_valid_word("CRANE", 5));
        assert!(!words.is_valid_word("CRANE", 6));
        assert!(!words.is_valid_word("XQZVW", 5));
        assert!(!words.is_valid_word("CRANE", 3));
    }

    #[test]
    fn random_word_is_always_valid() {
        let mut words = seeded();
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            for _ in 0..50 {
                let word = words.random_word(length).unwrap();
                assert_eq!(word.len(), length);
                assert!(words.is_valid_word(&word, length), "{word} not valid");
            }
        }
    }

    #[test]
    fn random_word_is_deterministic_for_a_seed() {
        let mut a = seeded();
        let mut b = seeded();
        let picks_a: Vec<_> = (0..5).filter_map(|_| a.random_word(5)).collect();
        let picks_b: Vec<_> = (0..5).filter_map(|_| b.random_word(5)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn unsupported_length_has_no_words() {
        let mut words = seeded();
        assert_eq!(words.random_word(3), None);
        assert_eq!(words.random_word(9), None);
        assert!(!words.is_valid_word("ELEPHANTS", 9));
    }

    #[test]
    fn custom_answers_are_merged_into_valid() {
        let words = WordLists::from_words(["crane"], ["zzzzz"], StdRng::seed_from_u64(1));
        assert!(words.is_valid_word("ZZZZZ", 5));
        assert!(words.is_valid_word("CRANE", 5));
        assert_eq!(words.answer_count(5), 1);
        // untouched lengths keep the embedded lists
        assert!(words.is_valid_word("ABLE", 4));
    }

    #[test]
    fn custom_valid_without_answers_doubles_as_answers() {
        let mut words = WordLists::from_words(["crane", "slate"], std::iter::empty(), StdRng::seed_from_u64(1));
        assert_eq!(words.answer_count(5), 2);
        assert_eq!(words.valid_count(5), 2);
        let picked = words.random_word(5).unwrap();
        assert!(picked == "CRANE" || picked == "SLATE");
    }
}
