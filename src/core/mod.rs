//! Core domain types for Wordle feedback
//!
//! Words, per-letter signals, feedback rules and the feedback model that
//! reproduces what a guesser sees for a given hidden word.

mod feedback;
mod signal;
mod word;

pub use feedback::{FeedbackRule, FeedbackSet, evaluate};
pub use signal::LetterSignal;
pub use word::{WORD_LEN, Word, WordError};

pub(crate) use feedback::evaluate_signals;
