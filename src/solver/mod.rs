//! Guess scoring engine
//!
//! Filters the word universe by accumulated feedback, enumerates every
//! possible outcome of a guess and ranks guesses by the expected size of
//! the candidate pool they leave behind.

mod error;
pub mod expected;
pub mod filter;
pub mod outcomes;
pub mod selector;

pub use error::SolverError;
pub use expected::{expected_remaining, outcome_counts};
pub use filter::{RuleSemantics, consistent_with, filter, filter_sets, satisfies};
pub use outcomes::{OUTCOME_COUNT, all_outcomes, outcome_index};
pub use selector::{ScoredGuess, Selection, scan_cost, select_best, select_best_with};
