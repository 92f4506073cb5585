//! Terminal output formatting
//!
//! Rendering of feedback and result lines, kept apart from scoring.

pub mod display;
pub mod formatters;

pub use display::{print_best, print_check_results, print_score_table};
pub use formatters::{FeedbackStyle, render, render_colored, render_plain};
