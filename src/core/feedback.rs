//! Feedback rules and the feedback model
//!
//! A [`FeedbackSet`] is the full per-letter response to one guess. The
//! [`evaluate`] function reproduces it from the hidden word, handling
//! duplicate letters the way the game does: exact matches consume their
//! letter first, then remaining occurrences are handed out left to right.

use super::signal::LetterSignal;
use super::word::{WORD_LEN, Word, letter_index};
use std::fmt;

/// One per-letter constraint learned from feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRule {
    position: usize,
    letter: u8,
    signal: LetterSignal,
}

impl FeedbackRule {
    /// Create a rule for `letter` at `position`
    ///
    /// Returns `None` if `position` is not below [`WORD_LEN`].
    #[must_use]
    pub const fn new(position: usize, letter: u8, signal: LetterSignal) -> Option<Self> {
        if position < WORD_LEN {
            Some(Self::at(position, letter, signal))
        } else {
            None
        }
    }

    const fn at(position: usize, letter: u8, signal: LetterSignal) -> Self {
        Self {
            position,
            letter,
            signal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn signal(&self) -> LetterSignal {
        self.signal
    }
}

/// The feedback for a single guess: one rule per position, in order
///
/// Equality is structural, so two sets are equivalent exactly when every
/// position carries the same letter and signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackSet {
    rules: [FeedbackRule; WORD_LEN],
}

impl FeedbackSet {
    /// Pair each letter of `guess` with the signal at the same position
    #[must_use]
    pub fn new(guess: &Word, signals: [LetterSignal; WORD_LEN]) -> Self {
        Self::from_letters(guess.letters(), signals)
    }

    pub(crate) fn from_letters(letters: &[u8; WORD_LEN], signals: [LetterSignal; WORD_LEN]) -> Self {
        let mut position = 0;
        let rules = signals.map(|signal| {
            let rule = FeedbackRule::at(position, letters[position], signal);
            position += 1;
            rule
        });
        Self { rules }
    }

    /// The rules, ordered by position
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &[FeedbackRule; WORD_LEN] {
        &self.rules
    }

    /// The signal at every position
    #[must_use]
    pub fn signals(&self) -> [LetterSignal; WORD_LEN] {
        self.rules.map(|rule| rule.signal)
    }

    /// The guess letters, ordered by position
    #[must_use]
    pub fn letters(&self) -> [u8; WORD_LEN] {
        self.rules.map(|rule| rule.letter)
    }

    /// The guessed word this feedback belongs to
    #[must_use]
    pub fn guess(&self) -> Word {
        Word::from_letters(self.letters())
    }

    /// True when every position is [`LetterSignal::Exact`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rules.iter().all(|rule| rule.signal == LetterSignal::Exact)
    }
}

/// Plain rendering: Exact letters uppercase, Present letters lowercase,
/// Absent letters as `-`.
impl fmt::Display for FeedbackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            let letter = char::from(rule.letter);
            let shown = match rule.signal {
                LetterSignal::Exact => letter.to_ascii_uppercase(),
                LetterSignal::Present => letter,
                LetterSignal::Absent => '-',
            };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}

/// Feedback a guesser sees after playing `guess` when the hidden word is `answer`
///
/// # Algorithm
/// 1. First pass: mark exact matches and take each from the letter budget
/// 2. Second pass, left to right: a remaining guess letter is Present and
///    consumes one unit while its budget is positive, otherwise Absent
///
/// # Examples
/// ```
/// use wordle_expect::core::{LetterSignal, Word, evaluate};
///
/// let answer = Word::new("drink").unwrap();
/// let guess = Word::new("snare").unwrap();
/// let feedback = evaluate(&answer, &guess);
///
/// use LetterSignal::{Absent, Present};
/// assert_eq!(feedback.signals(), [Absent, Present, Absent, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> FeedbackSet {
    FeedbackSet::new(guess, evaluate_signals(answer, guess.letters()))
}

/// Signals only, without building rules
pub(crate) fn evaluate_signals(answer: &Word, guess: &[u8; WORD_LEN]) -> [LetterSignal; WORD_LEN] {
    let mut signals = [LetterSignal::Absent; WORD_LEN];
    let mut budget = answer.letter_counts();

    for ((signal, &letter), &target) in signals.iter_mut().zip(guess).zip(answer.letters()) {
        if letter == target {
            *signal = LetterSignal::Exact;
            budget[letter_index(letter)] -= 1;
        }
    }

    for (signal, &letter) in signals.iter_mut().zip(guess) {
        if *signal == LetterSignal::Exact {
            continue;
        }
        let remaining = &mut budget[letter_index(letter)];
        if *remaining > 0 {
            *signal = LetterSignal::Present;
            *remaining -= 1;
        }
    }

    signals
}
