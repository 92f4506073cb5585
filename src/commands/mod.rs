//! Command implementations

pub mod suggest;

pub use self_test::{Check, SelfTestReport, run_self_test};
pub use suggest::{SuggestOptions, Suggestion, suggest};
