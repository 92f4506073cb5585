//! Expected-remaining guess selection
//!
//! Scores every candidate guess and keeps the one expected to leave the
//! smallest pool.

use super::error::SolverError;
use super::expected::expected_remaining;
use super::filter::RuleSemantics;
use super::outcomes::OUTCOME_COUNT;
use crate::core::{FeedbackSet, Word};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// A guess together with its expected remaining candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Outcome of a selection run
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// First guess reaching the lowest score
    pub best: &'a Word,
    /// Score of `best`
    pub score: f64,
    /// Every scored guess, in the order the guesses were given
    pub scores: Vec<ScoredGuess<'a>>,
}

/// Upper bound on letter checks for scoring `guesses` against `pool`
///
/// Each guess filters the pool once per outcome.
#[must_use]
pub const fn scan_cost(guesses: usize, pool: usize) -> usize {
    guesses.saturating_mul(OUTCOME_COUNT).saturating_mul(pool)
}

/// Select the guess with the lowest expected remaining candidates
///
/// Ties go to the guess that appears first in `candidates`.
///
/// # Errors
/// - [`SolverError::NoGuesses`] if `candidates` is empty
/// - [`SolverError::NoCandidates`] if `pool` is empty
///
/// # Examples
/// ```
/// use wordle_expect::core::Word;
/// use wordle_expect::solver::{RuleSemantics, select_best};
///
/// let words: Vec<Word> = ["fuzzy", "brink", "drink", "prink"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let pool: Vec<&Word> = words[1..].iter().collect();
/// let guesses: Vec<&Word> = words.iter().collect();
///
/// let selection = select_best(&guesses, &pool, &[], RuleSemantics::Lenient).unwrap();
/// assert_eq!(selection.best.text(), "brink");
/// assert_eq!(selection.scores.len(), 4);
/// ```
pub fn select_best<'a>(
    candidates: &[&'a Word],
    pool: &[&Word],
    accumulated: &[FeedbackSet],
    semantics: RuleSemantics,
) -> Result<Selection<'a>, SolverError> {
    select_best_with(candidates, pool, accumulated, semantics, || {})
}

/// [`select_best`] that calls `tick` once after each guess is scored
///
/// Guesses are scored in parallel; `tick` may run on any worker thread.
///
/// # Errors
/// Same as [`select_best`].
pub fn select_best_with<'a, F>(
    candidates: &[&'a Word],
    pool: &[&Word],
    accumulated: &[FeedbackSet],
    semantics: RuleSemantics,
    tick: F,
) -> Result<Selection<'a>, SolverError>
where
    F: Fn() + Sync,
{
    if candidates.is_empty() {
        return Err(SolverError::NoGuesses);
    }
    if pool.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    debug!(
        "scoring {} guesses against {} candidates ({} checks at most)",
        candidates.len(),
        pool.len(),
        scan_cost(candidates.len(), pool.len())
    );
    let started = Instant::now();

    let scores: Vec<ScoredGuess<'a>> = candidates
        .par_iter()
        .map(|&word| -> Result<ScoredGuess<'a>, SolverError> {
            let score = expected_remaining(pool, accumulated, word, semantics)?;
            tick();
            Ok(ScoredGuess { word, score })
        })
        .collect::<Result<_, SolverError>>()?;

    let (first, rest) = scores.split_first().ok_or(SolverError::NoGuesses)?;
    let best = rest
        .iter()
        .fold(first, |best, scored| if scored.score < best.score { scored } else { best });
    let (best, score) = (best.word, best.score);

    debug!("scored in {:.2?}, best {best} at {score:.3}", started.elapsed());

    Ok(Selection {
        best,
        score,
        scores,
    })
}
