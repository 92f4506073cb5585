//! Reading the word universe and recorded feedback
//!
//! Both sources are newline-delimited text, read in full before any
//! scoring starts.

mod error;
pub mod feedback;
pub mod words;

pub use error::InputError;
pub use feedback::{Record, feedback_sets, flatten_rules, read_feedback};
pub use words::{load_words, load_words_from_file};
