//! Expected remaining candidates for a guess
//!
//! Assuming the hidden word is uniform over the pool, an outcome that
//! keeps `k` of `N` words occurs with probability `k / N` and leaves `k`
//! words behind. The expected pool size after the guess is therefore
//! `Σ k² / N` over all outcomes. Lower is better.
//!
//! A pool holding only the guess itself is already solved and scores zero.

use super::error::SolverError;
use super::filter::{RuleSemantics, consistent_with};
use super::outcomes::all_outcomes;
use crate::core::{FeedbackSet, Word};

/// Pool words consistent with each outcome of `guess`, by outcome index
#[must_use]
pub fn outcome_counts(pool: &[&Word], guess: &Word, semantics: RuleSemantics) -> Vec<usize> {
    all_outcomes(guess)
        .iter()
        .map(|outcome| {
            pool.iter()
                .filter(|&&word| consistent_with(word, outcome, semantics))
                .count()
        })
        .collect()
}

/// Expected size of `pool` after playing `guess`
///
/// `pool` must already reflect prior feedback; `_accumulated` is not
/// applied again.
///
/// # Errors
/// Returns [`SolverError::NoCandidates`] if `pool` is empty.
///
/// # Examples
/// ```
/// use wordle_expect::core::Word;
/// use wordle_expect::solver::{RuleSemantics, expected_remaining};
///
/// let drink = Word::new("drink").unwrap();
/// let score = expected_remaining(&[&drink], &[], &drink, RuleSemantics::Lenient).unwrap();
/// assert!(score.abs() < f64::EPSILON);
/// ```
pub fn expected_remaining(
    pool: &[&Word],
    _accumulated: &[FeedbackSet],
    guess: &Word,
    semantics: RuleSemantics,
) -> Result<f64, SolverError> {
    match pool {
        [] => return Err(SolverError::NoCandidates),
        [only] if *only == guess => return Ok(0.0),
        _ => {}
    }

    let total = pool.len() as f64;
    let expected = outcome_counts(pool, guess, semantics)
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let k = count as f64;
            k * (k / total)
        })
        .sum();

    Ok(expected)
}
