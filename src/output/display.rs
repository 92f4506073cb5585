//! Display functions for command results

use super::formatters::{FeedbackStyle, format_check_line, format_score_line};
use crate::commands::SelfTestReport;
use crate::solver::Selection;

/// Print the chosen guess on its own line
pub fn print_best(selection: &Selection<'_>) {
    println!("{}", selection.best);
}

/// Print every scored guess as `<word> <score>`
pub fn print_score_table(selection: &Selection<'_>) {
    for scored in &selection.scores {
        println!("{}", format_score_line(scored));
    }
}

/// Print one OK/FAIL line per replayed record
pub fn print_check_results(report: &SelfTestReport, style: FeedbackStyle) {
    for check in &report.checks {
        println!("{}", format_check_line(check, style));
    }
}
