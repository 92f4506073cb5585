//! Word list loading
//!
//! One word per line. Blank lines and lines that are not valid words are
//! skipped; repeated words keep their first occurrence.

use super::error::InputError;
use crate::core::{WORD_LEN, Word};
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load the word universe from a file
///
/// # Errors
///
/// Returns [`InputError::Open`] if the file cannot be opened, and otherwise
/// the same errors as [`load_words`].
///
/// # Examples
/// ```no_run
/// use wordle_expect::input::load_words_from_file;
///
/// let words = load_words_from_file("words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let words = load_words(BufReader::new(file))?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load the word universe from a reader
///
/// # Errors
///
/// - [`InputError::Read`] if reading fails
/// - [`InputError::EmptyWordList`] if no valid word was found
pub fn load_words<R: BufRead>(reader: R) -> Result<Vec<Word>, InputError> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Ok(word) = Word::new(trimmed) else {
            skipped += 1;
            continue;
        };

        if seen.insert(word.clone()) {
            words.push(word);
        } else {
            warn!("duplicate word {word} ignored");
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} lines that are not {WORD_LEN}-letter words");
    }

    if words.is_empty() {
        return Err(InputError::EmptyWordList { len: WORD_LEN });
    }

    Ok(words)
}
