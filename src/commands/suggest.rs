//! Next-guess suggestion command
//!
//! Narrows the universe to the words consistent with recorded feedback and
//! scores candidate guesses against that pool.

use crate::core::{FeedbackSet, Word};
use crate::solver::{RuleSemantics, Selection, SolverError, filter_sets, select_best_with};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

/// Settings for a suggestion run
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestOptions {
    /// Score every word of the universe instead of only the pool
    pub exhaustive: bool,
    /// How feedback narrows the pool
    pub semantics: RuleSemantics,
    /// Draw a progress bar on stderr while scoring
    pub progress: bool,
}

/// Result of a suggestion run
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    /// Words still consistent with the feedback
    pub pool_size: usize,
    pub selection: Selection<'a>,
}

/// Suggest the next guess for `universe` given recorded `feedback`
///
/// # Errors
///
/// Returns [`SolverError::NoCandidates`] when the feedback rules out every word.
pub fn suggest<'a>(
    universe: &'a [Word],
    feedback: &[FeedbackSet],
    options: &SuggestOptions,
) -> Result<Suggestion<'a>, SolverError> {
    let pool = filter_sets(universe, feedback, options.semantics);
    debug!(
        "{} of {} words consistent with {} feedback records ({:?})",
        pool.len(),
        universe.len(),
        feedback.len(),
        options.semantics
    );

    if pool.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    let guesses: Vec<&Word> = if options.exhaustive {
        universe.iter().collect()
    } else {
        pool.clone()
    };

    let progress = progress_bar(guesses.len(), options.progress);
    let selection = select_best_with(&guesses, &pool, feedback, options.semantics, || {
        progress.inc(1);
    });
    progress.finish_and_clear();
    let selection = selection?;

    info!(
        "best guess {} leaves {:.3} of {} candidates on average",
        selection.best,
        selection.score,
        pool.len()
    );

    Ok(Suggestion {
        pool_size: pool.len(),
        selection,
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {eta}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn feedback(answer: &str, guess: &str) -> FeedbackSet {
        evaluate(&Word::new(answer).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn no_feedback_scores_the_whole_universe() {
        let universe = words(&["drink", "brink", "prink", "snare"]);
        let result = suggest(&universe, &[], &SuggestOptions::default()).unwrap();

        assert_eq!(result.pool_size, 4);
        assert_eq!(result.selection.scores.len(), 4);
    }

    #[test]
    fn feedback_narrows_the_pool() {
        let universe = words(&["drink", "brink", "prink", "snare", "stare", "fluff"]);
        let result = suggest(&universe, &[feedback("drink", "trick")], &SuggestOptions::default())
            .unwrap();

        assert_eq!(result.pool_size, 3);
        let scored: Vec<&str> = result
            .selection
            .scores
            .iter()
            .map(|s| s.word.text())
            .collect();
        assert_eq!(scored, vec!["drink", "brink", "prink"]);
        assert_eq!(result.selection.best.text(), "drink");
    }

    #[test]
    fn exhaustive_mode_scores_every_word_against_the_pool() {
        let universe = words(&["drink", "brink", "prink", "snare", "stare", "fluff"]);
        let options = SuggestOptions {
            exhaustive: true,
            ..SuggestOptions::default()
        };
        let result = suggest(&universe, &[feedback("drink", "trick")], &options).unwrap();

        assert_eq!(result.pool_size, 3);
        assert_eq!(result.selection.scores.len(), universe.len());
        let fluff = &result.selection.scores[5];
        assert_eq!(fluff.word.text(), "fluff");
        assert!((fluff.score - 3.0).abs() < 1e-12);
    }

    #[test]
    fn exhaustive_tie_goes_to_the_earlier_non_candidate() {
        // DFFFF splits {drink, brink, prink} exactly like each member does
        let universe = words(&["dffff", "drink", "brink", "prink"]);
        let options = SuggestOptions {
            exhaustive: true,
            ..SuggestOptions::default()
        };
        let result = suggest(&universe, &[feedback("drink", "trick")], &options).unwrap();

        assert_eq!(result.pool_size, 3);
        for scored in &result.selection.scores {
            let off = (scored.score - 5.0 / 3.0).abs();
            assert!(off < 1e-12, "{} scored {}", scored.word, scored.score);
        }
        assert_eq!(result.selection.best.text(), "dffff");
    }

    #[test]
    fn contradictory_feedback_has_no_candidates() {
        let universe = words(&["drink", "brink"]);
        let result = suggest(
            &universe,
            &[feedback("snare", "drink")],
            &SuggestOptions::default(),
        );
        assert_eq!(result, Err(SolverError::NoCandidates));
    }

    #[test]
    fn strict_semantics_keeps_repeated_letter_answers() {
        let universe = words(&["abide", "bride", "aside"]);
        let records = [feedback("abide", "speed")];

        let lenient = suggest(&universe, &records, &SuggestOptions::default());
        assert_eq!(lenient, Err(SolverError::NoCandidates));

        let options = SuggestOptions {
            semantics: RuleSemantics::Strict,
            ..SuggestOptions::default()
        };
        let strict = suggest(&universe, &records, &options).unwrap();
        assert_eq!(strict.pool_size, 2);
    }
}
