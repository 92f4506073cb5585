//! Outcome enumeration
//!
//! Every guess has 3^5 = 243 conceivable feedback patterns. Each one is
//! indexed by reading the signals as a base-3 number with position 0 as
//! the most significant digit.

use crate::core::{FeedbackSet, LetterSignal, WORD_LEN, Word};

/// Number of distinct feedback patterns for one guess
pub const OUTCOME_COUNT: usize = 3usize.pow(WORD_LEN as u32);

/// Every feedback pattern for `guess`, ordered by outcome index
///
/// The result does not depend on any hidden word; each set carries the
/// guess letters paired with the synthetic signals for its index.
///
/// # Examples
/// ```
/// use wordle_expect::core::{LetterSignal, Word};
/// use wordle_expect::solver::{OUTCOME_COUNT, all_outcomes};
///
/// let outcomes = all_outcomes(&Word::new("snare").unwrap());
/// assert_eq!(outcomes.len(), OUTCOME_COUNT);
/// assert_eq!(outcomes[0].signals(), [LetterSignal::Absent; 5]);
/// assert!(outcomes[OUTCOME_COUNT - 1].is_solved());
/// ```
#[must_use]
pub fn all_outcomes(guess: &Word) -> Vec<FeedbackSet> {
    (0..OUTCOME_COUNT)
        .map(|index| FeedbackSet::new(guess, outcome_signals(index)))
        .collect()
}

/// Index of a feedback set within [`all_outcomes`] for its guess
#[must_use]
pub fn outcome_index(set: &FeedbackSet) -> usize {
    set.signals()
        .iter()
        .fold(0, |index, signal| index * 3 + signal.digit())
}

fn outcome_signals(index: usize) -> [LetterSignal; WORD_LEN] {
    let mut signals = [LetterSignal::Absent; WORD_LEN];
    let mut rest = index;
    for signal in signals.iter_mut().rev() {
        *signal = LetterSignal::ALL[rest % 3];
        rest /= 3;
    }
    signals
}
