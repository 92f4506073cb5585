//! Errors raised by the scoring engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The feedback rules eliminated every word in the universe
    #[error("no candidates remain: the feedback rules eliminate every word")]
    NoCandidates,
    /// The list of guesses to score was empty
    #[error("no guesses to score")]
    NoGuesses,
}
