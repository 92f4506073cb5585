//! Rule filter
//!
//! Decides whether a word is consistent with feedback and reduces word
//! lists to the consistent subset.

use crate::core::{FeedbackRule, FeedbackSet, LetterSignal, Word, evaluate_signals};

/// How an `Absent` signal constrains candidate words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSemantics {
    /// Each rule is checked on its own; `Absent` forbids the letter anywhere.
    ///
    /// This rejects words that contain a letter once when a guess repeated
    /// it and only one copy was marked Present or Exact.
    #[default]
    Lenient,
    /// A word is consistent with a feedback set only if playing that guess
    /// against the word would produce exactly that feedback.
    Strict,
}

/// Check a single rule against a word
///
/// - `Absent`: the letter does not occur in the word
/// - `Exact`: the letter sits at the rule's position
/// - `Present`: the letter occurs, but not at the rule's position
#[inline]
#[must_use]
pub fn satisfies(word: &Word, rule: &FeedbackRule) -> bool {
    let letter = rule.letter();
    match rule.signal() {
        LetterSignal::Absent => !word.contains(letter),
        LetterSignal::Exact => word.letter_at(rule.position()) == letter,
        LetterSignal::Present => word.contains(letter) && word.letter_at(rule.position()) != letter,
    }
}

/// Keep the words that satisfy every rule, preserving input order
///
/// An empty rule list keeps every word.
///
/// # Examples
/// ```
/// use wordle_expect::core::{Word, evaluate};
/// use wordle_expect::solver::filter;
///
/// let words: Vec<Word> = ["drink", "brink", "snare"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let feedback = evaluate(&words[0], &Word::new("brink").unwrap());
///
/// let pool = filter(&words, feedback.rules());
/// assert_eq!(pool, vec![&words[0]]);
/// ```
pub fn filter<'a, I>(words: I, rules: &[FeedbackRule]) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| rules.iter().all(|rule| satisfies(word, rule)))
        .collect()
}

/// Check a word against the whole feedback for one guess
#[must_use]
pub fn consistent_with(word: &Word, set: &FeedbackSet, semantics: RuleSemantics) -> bool {
    match semantics {
        RuleSemantics::Lenient => set.rules().iter().all(|rule| satisfies(word, rule)),
        RuleSemantics::Strict => evaluate_signals(word, &set.letters()) == set.signals(),
    }
}

/// Keep the words consistent with every feedback set, preserving input order
pub fn filter_sets<'a, I>(words: I, sets: &[FeedbackSet], semantics: RuleSemantics) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| sets.iter().all(|set| consistent_with(word, set, semantics)))
        .collect()
}
