//! Recorded feedback parsing
//!
//! Records come in pairs of lines: the guessed word, then one symbol per
//! letter (`' '` absent, `'.'` present, anything else exact). The symbol
//! line is padded with spaces to the word length, so trailing absent
//! letters may be left off, and symbols past the word length are ignored.
//! A stream that ends after a letters line drops that partial record.

use super::error::InputError;
use crate::core::{FeedbackRule, FeedbackSet, LetterSignal, WORD_LEN, Word};
use log::debug;
use std::io::BufRead;

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub guess: Word,
    pub feedback: FeedbackSet,
}

/// Read every complete record from `reader`
///
/// # Errors
///
/// - [`InputError::Read`] if reading fails
/// - [`InputError::MalformedRecord`] if a letters line is not a valid word
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use wordle_expect::core::LetterSignal::{Absent, Present};
/// use wordle_expect::input::read_feedback;
///
/// let records = read_feedback(Cursor::new("snare\n . .\n")).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].feedback.signals(), [Absent, Present, Absent, Present, Absent]);
/// ```
pub fn read_feedback<R: BufRead>(reader: R) -> Result<Vec<Record>, InputError> {
    let mut lines = reader.lines().enumerate();
    let mut records = Vec::new();

    while let Some((index, letters)) = lines.next() {
        let letters = letters?;
        let Some((_, symbols)) = lines.next() else {
            debug!("dropping partial record at line {}", index + 1);
            break;
        };
        records.push(parse_record(index + 1, &letters, &symbols?)?);
    }

    Ok(records)
}

/// Parse one record whose letters line is at 1-based `line`
fn parse_record(line: usize, letters: &str, symbols: &str) -> Result<Record, InputError> {
    let letters = letters.trim();
    let found = letters.chars().count();
    if found < WORD_LEN {
        return Err(InputError::MalformedRecord {
            line,
            reason: format!("expected {WORD_LEN} letters, found {found}"),
        });
    }

    let guess = Word::new(letters).map_err(|e| InputError::MalformedRecord {
        line,
        reason: e.to_string(),
    })?;

    let (signals, extra) = parse_signals(symbols);
    if extra > 0 {
        debug!(
            "ignoring {extra} feedback symbols past position {WORD_LEN} on line {}",
            line + 1
        );
    }

    let feedback = FeedbackSet::new(&guess, signals);
    Ok(Record { guess, feedback })
}

/// Pad to [`WORD_LEN`] with absent, counting non-blank symbols past the end
fn parse_signals(symbols: &str) -> ([LetterSignal; WORD_LEN], usize) {
    let mut signals = [LetterSignal::Absent; WORD_LEN];
    let mut chars = symbols.chars();

    for (signal, symbol) in signals.iter_mut().zip(chars.by_ref()) {
        *signal = LetterSignal::from_symbol(symbol);
    }

    (signals, chars.filter(|c| !c.is_whitespace()).count())
}

/// The accumulated per-letter rules of all records, in record order
#[must_use]
pub fn flatten_rules(records: &[Record]) -> Vec<FeedbackRule> {
    records
        .iter()
        .flat_map(|record| record.feedback.rules().iter().copied())
        .collect()
}

/// The feedback sets of all records, in record order
#[must_use]
pub fn feedback_sets(records: &[Record]) -> Vec<FeedbackSet> {
    records.iter().map(|record| record.feedback.clone()).collect()
}
