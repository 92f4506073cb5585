//! Wordle Expected-Remaining Solver - CLI
//!
//! Reads recorded guess feedback and prints the guess expected to leave the
//! fewest candidate words, or replays the feedback against a known answer.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wordle_expect::{
    commands::{SuggestOptions, run_self_test, suggest},
    core::Word,
    input::{Record, feedback_sets, load_words_from_file, read_feedback},
    output::{FeedbackStyle, print_best, print_check_results, print_score_table},
    solver::RuleSemantics,
};

#[derive(Parser)]
#[command(
    name = "wordle_expect",
    about = "Suggest the Wordle guess that minimizes the expected remaining candidates",
    version,
    author
)]
struct Cli {
    /// Feedback records (guess line, then symbol line); '-' or omitted reads stdin
    feedback: Option<PathBuf>,

    /// List every scored word with its expected remaining candidates
    #[arg(short, long)]
    list: bool,

    /// Consider every word in the list as a guess, not only consistent ones
    #[arg(short, long)]
    all: bool,

    /// Replay the feedback against this answer and report mismatches
    #[arg(short = 't', long = "test", value_name = "WORD")]
    test_word: Option<String>,

    /// Word list, one word per line
    #[arg(short, long, default_value = "words")]
    words: PathBuf,

    /// Keep only words that would reproduce each feedback exactly
    #[arg(long)]
    strict: bool,

    /// Render feedback without colour
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reader = open_feedback(cli.feedback.as_deref())?;
    let records = read_feedback(reader).context("failed to read feedback records")?;

    if let Some(answer) = &cli.test_word {
        let style = if cli.no_color {
            FeedbackStyle::Plain
        } else {
            FeedbackStyle::Colored
        };
        return run_self_test_command(answer, &records, style);
    }

    run_suggest_command(&cli, &records)?;
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn open_feedback(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("cannot open feedback file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn run_self_test_command(answer: &str, records: &[Record], style: FeedbackStyle) -> Result<ExitCode> {
    let answer = Word::new(answer).with_context(|| format!("invalid test word '{answer}'"))?;
    let report = run_self_test(&answer, records);
    print_check_results(&report, style);

    if report.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn run_suggest_command(cli: &Cli, records: &[Record]) -> Result<()> {
    let universe = load_words_from_file(&cli.words).context("failed to load word list")?;
    let feedback = feedback_sets(records);

    let options = SuggestOptions {
        exhaustive: cli.all,
        semantics: if cli.strict {
            RuleSemantics::Strict
        } else {
            RuleSemantics::Lenient
        },
        progress: io::stderr().is_terminal() && io::stdout().is_terminal(),
    };

    let suggestion = suggest(&universe, &feedback, &options)?;

    if cli.list {
        print_score_table(&suggestion.selection);
    } else {
        print_best(&suggestion.selection);
    }
    Ok(())
}
