//! Property checks for the feedback model, filter and scorer over a
//! generated word universe.

use std::io::Cursor;
use wordle_expect::commands::{SuggestOptions, run_self_test, suggest};
use wordle_expect::core::{LetterSignal, WORD_LEN, Word, evaluate};
use wordle_expect::input::{feedback_sets, flatten_rules, load_words, read_feedback};
use wordle_expect::solver::{
    OUTCOME_COUNT, RuleSemantics, all_outcomes, expected_remaining, filter, filter_sets,
    outcome_index, scan_cost, select_best,
};

const LETTERS: &[u8] = b"aeilnorstdcp";

/// Distinct pseudo-random words over a small alphabet
fn generated_universe(count: usize) -> Vec<Word> {
    let base = LETTERS.len();
    let space = base.pow(WORD_LEN as u32);
    let mut words = Vec::with_capacity(count);
    let mut seen = std::collections::HashSet::new();
    let mut i = 0usize;

    while words.len() < count {
        let mut n = (i * 7919) % space;
        i += 1;
        let mut text = String::with_capacity(WORD_LEN);
        for _ in 0..WORD_LEN {
            text.push(char::from(LETTERS[n % base]));
            n /= base;
        }
        if seen.insert(text.clone()) {
            words.push(Word::new(text).unwrap());
        }
    }
    words
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn worked_example_snare_against_drink() {
    use LetterSignal::{Absent, Present};
    let set = evaluate(&word("drink"), &word("snare"));
    assert_eq!(set.signals(), [Absent, Present, Absent, Present, Absent]);
}

#[test]
fn duplicate_letter_regression_assis_against_sissy() {
    use LetterSignal::{Absent, Exact, Present};
    let set = evaluate(&word("sissy"), &word("assis"));
    assert_eq!(set.signals(), [Absent, Present, Exact, Present, Present]);

    // Never more non-grey signals for a letter than the answer holds
    let answer = word("sissy");
    let non_grey_s = set
        .rules()
        .iter()
        .filter(|rule| rule.letter() == b's' && rule.signal() != Absent)
        .count();
    assert!(non_grey_s <= answer.count_of(b's'));
}

#[test]
fn filter_is_idempotent_and_monotone() {
    let universe = generated_universe(300);
    let answers = &universe[..10];
    let guesses = &universe[100..110];

    for (answer, guess) in answers.iter().zip(guesses) {
        let rules = evaluate(answer, guess).rules().to_vec();

        let once = filter(&universe, &rules);
        let twice = filter(once.iter().copied(), &rules);
        assert_eq!(once, twice);
        // Only a repeated guess letter can make the lenient rules drop the answer
        if guess.letters().iter().all(|&l| guess.count_of(l) == 1) {
            assert!(once.contains(&answer));
        }

        for n in 0..rules.len() {
            let fewer = filter(&universe, &rules[..n]).len();
            let more = filter(&universe, &rules[..=n]).len();
            assert!(more <= fewer);
        }
    }
}

#[test]
fn strict_filter_always_keeps_the_answer() {
    let universe = generated_universe(300);
    for (answer, guess) in universe[..20].iter().zip(&universe[150..170]) {
        let feedback = [evaluate(answer, guess)];
        let pool = filter_sets(&universe, &feedback, RuleSemantics::Strict);
        assert!(pool.contains(&answer), "{answer} dropped after {guess}");
    }
}

#[test]
fn every_evaluation_is_exactly_one_outcome() {
    let universe = generated_universe(60);
    for guess in &universe[..6] {
        let outcomes = all_outcomes(guess);
        assert_eq!(outcomes.len(), OUTCOME_COUNT);

        for answer in &universe {
            let actual = evaluate(answer, guess);
            assert_eq!(outcomes.iter().filter(|&set| *set == actual).count(), 1);
            assert_eq!(outcomes[outcome_index(&actual)], actual);
        }
    }
}

#[test]
fn expected_remaining_is_bounded_by_pool_size() {
    let universe = generated_universe(80);
    let pool: Vec<&Word> = universe.iter().collect();

    for guess in &universe[..20] {
        for semantics in [RuleSemantics::Lenient, RuleSemantics::Strict] {
            let score = expected_remaining(&pool, &[], guess, semantics).unwrap();
            assert!(score >= 0.0);
            assert!(score <= pool.len() as f64 + 1e-9);
        }
    }

    // A guess sharing no letter with the pool learns nothing
    let score = expected_remaining(&pool, &[], &word("fuzzy"), RuleSemantics::Lenient).unwrap();
    assert!((score - pool.len() as f64).abs() < 1e-9);
}

#[test]
fn selection_is_deterministic() {
    let universe = generated_universe(120);
    let pool: Vec<&Word> = universe.iter().collect();

    let first = select_best(&pool, &pool, &[], RuleSemantics::Lenient).unwrap();
    let second = select_best(&pool, &pool, &[], RuleSemantics::Lenient).unwrap();

    assert_eq!(first.best, second.best);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
    assert_eq!(first.scores, second.scores);

    // The best is the first word reaching the minimum
    let first_min = first
        .scores
        .iter()
        .position(|s| s.score == first.score)
        .unwrap();
    assert_eq!(first.scores[first_min].word, first.best);
    assert!(first.scores.iter().all(|s| s.score >= first.score));
}

#[test]
fn exhaustive_scan_over_a_larger_universe() {
    let universe = generated_universe(400);
    let answer = &universe[7];
    let feedback = [evaluate(answer, &universe[200])];

    // Strict rules always keep the answer, so the pool is never empty
    let pool_size = filter_sets(&universe, &feedback, RuleSemantics::Strict).len();
    assert!(pool_size > 0);
    // Bound the work before running it
    let cost = scan_cost(universe.len(), pool_size);
    assert_eq!(cost, universe.len() * 243 * pool_size);
    assert!(cost <= 400 * 243 * 400);

    let options = SuggestOptions {
        exhaustive: true,
        semantics: RuleSemantics::Strict,
        ..SuggestOptions::default()
    };
    let result = suggest(&universe, &feedback, &options).unwrap();
    assert_eq!(result.pool_size, pool_size);
    assert_eq!(result.selection.scores.len(), universe.len());
}

#[test]
fn end_to_end_from_text_input() {
    let universe = load_words(Cursor::new("drink\nbrink\nprink\nsnare\nstare\nfluff\n")).unwrap();
    let records = read_feedback(Cursor::new("trick\n xx x\n")).unwrap();
    assert_eq!(flatten_rules(&records).len(), WORD_LEN);

    let report = run_self_test(&word("drink"), &records);
    assert!(report.all_passed());

    let result = suggest(&universe, &feedback_sets(&records), &SuggestOptions::default()).unwrap();
    assert_eq!(result.pool_size, 3);
    assert_eq!(result.selection.best.text(), "drink");

    let report = run_self_test(&word("snare"), &records);
    assert_eq!(report.failures(), 1);
}
