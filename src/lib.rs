//! Wordle Expected-Remaining Solver
//!
//! Picks the next Wordle guess that minimizes the expected number of
//! candidate words left after the feedback comes back.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_expect::core::{Word, evaluate};
//! use wordle_expect::solver::{RuleSemantics, filter_sets, select_best};
//!
//! let universe: Vec<Word> = ["drink", "brink", "prink", "snare", "stare"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! // Feedback for TRICK when the answer is DRINK
//! let feedback = [evaluate(&universe[0], &Word::new("trick").unwrap())];
//!
//! let pool = filter_sets(&universe, &feedback, RuleSemantics::Lenient);
//! let selection = select_best(&pool, &pool, &feedback, RuleSemantics::Lenient).unwrap();
//! println!("Next guess: {}", selection.best);
//! ```

// Core domain types
pub mod core;

// Filtering, outcome enumeration and scoring
pub mod solver;

// Word list and feedback readers
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
