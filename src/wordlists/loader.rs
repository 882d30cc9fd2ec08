//! Word list parsing and file loading
//!
//! Lists hold one word per line in any case, with LF, CRLF or CR endings.
//! Only purely alphabetic words of 4 to 8 letters are kept, uppercased.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::error::WordListError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::path::Path;

/// Words grouped by their length
pub type WordsByLength = FxHashMap<usize, FxHashSet<String>>;

/// Normalize one candidate word, or `None` if it cannot be played
#[must_use]
pub fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    let len = word.len();
    if (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&len)
        && word.bytes().all(|b| b.is_ascii_alphabetic())
    {
        Some(word.to_ascii_uppercase())
    } else {
        None
    }
}

/// Group playable words from `words` by length
pub fn group_by_length<'a, I>(words: I) -> WordsByLength
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grouped = WordsByLength::default();
    for word in words.into_iter().filter_map(normalize) {
        grouped.entry(word.len()).or_default().insert(word);
    }
    grouped
}

/// Parse the text of a word list file
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\r\nable\nx\nno-go\rabsolute\n");
/// assert!(words[&5].contains("CRANE"));
/// assert!(words[&4].contains("ABLE"));
/// assert!(words[&8].contains("ABSOLUTE"));
/// assert_eq!(words.values().map(|s| s.len()).sum::<usize>(), 3);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> WordsByLength {
    group_by_length(text.split(['\n', '\r']))
}

/// Load and parse a word list file
///
/// # Errors
///
/// Returns `WordListError::FileRead` if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordsByLength, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| WordListError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let words = parse_words(&content);
    tracing::info!(
        path = %path.display(),
        words = words.values().map(FxHashSet::len).sum::<usize>(),
        "loaded word list"
    );
    Ok(words)
}
