//! Formatting utilities for terminal output

use crate::commands::Check;
use crate::core::{FeedbackSet, LetterSignal};
use crate::solver::ScoredGuess;
use colored::Colorize;

/// How feedback is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStyle {
    /// Coloured tiles, one letter each
    #[default]
    Colored,
    /// Letter case and `-` only
    Plain,
}

/// Render feedback as coloured letter tiles
///
/// Absent letters sit on grey, present on yellow, exact on green.
#[must_use]
pub fn render_colored(set: &FeedbackSet) -> String {
    set.rules()
        .iter()
        .map(|rule| {
            let letter = char::from(rule.letter()).to_string();
            match rule.signal() {
                LetterSignal::Absent => letter.on_bright_black().bold(),
                LetterSignal::Present => letter.bright_white().on_bright_yellow().bold(),
                LetterSignal::Exact => letter.bright_white().on_bright_green().bold(),
            }
            .to_string()
        })
        .collect()
}

/// Render feedback without colour: exact uppercase, present lowercase, absent `-`
#[must_use]
pub fn render_plain(set: &FeedbackSet) -> String {
    set.to_string()
}

#[must_use]
pub fn render(set: &FeedbackSet, style: FeedbackStyle) -> String {
    match style {
        FeedbackStyle::Colored => render_colored(set),
        FeedbackStyle::Plain => render_plain(set),
    }
}

/// `<word> <score>` with three decimals
#[must_use]
pub fn format_score_line(scored: &ScoredGuess<'_>) -> String {
    format!("{} {:.3}", scored.word, scored.score)
}

/// `<word> OK <feedback>` or `<word> FAIL <expected> != <actual>`
#[must_use]
pub fn format_check_line(check: &Check, style: FeedbackStyle) -> String {
    if check.passed() {
        format!("{} OK {}", check.guess, render(&check.expected, style))
    } else {
        format!(
            "{} FAIL {} != {}",
            check.guess,
            render(&check.expected, style),
            render(&check.actual, style)
        )
    }
}
