//! Wordle Trie - CLI
//!
//! Solves, analyzes and suggests guesses using trie pruning and Shannon entropy.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_trie::{
    commands::{SolveConfig, analyze_word, parse_round, solve_word, suggest_next},
    core::{FeedbackScheme, Word},
    output::{print_analysis_result, print_opening, print_solve_result, print_suggestion},
    solver::{Guesser, SolverConfig},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Wordle solver pruning candidates with a trie and guessing by Shannon entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default demo dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Feedback symbols: 'colors' (G/Y/-) or 'marks' (letter/-/+)
    #[arg(long, global = true, default_value = "colors")]
    scheme: FeedbackScheme,

    /// Seed for shortcut and fallback guesses (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Probe with synthetic words at or above this many candidates
    #[arg(long, global = true, default_value = "50")]
    wide_set: usize,

    /// Accept a scored guess within this many bits of the ideal split
    #[arg(long, global = true, default_value = "0.5")]
    tolerance: f64,

    /// From this many guesses on, take the best scored guess unconditionally
    #[arg(long, global = true, default_value = "5")]
    late_round: usize,

    /// Top letters per position combined into probe words
    #[arg(long, global = true, default_value = "3")]
    letters_per_position: usize,

    /// Only try a shortcut probe with more candidates than this
    #[arg(long, global = true, default_value = "2")]
    shortcut_min: usize,

    /// Keep at most this many source rows in the pattern cache
    #[arg(long, global = true)]
    cache_rows: Option<usize>,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            wide_set_threshold: self.wide_set,
            entropy_tolerance: self.tolerance,
            late_round: self.late_round,
            letters_per_position: self.letters_per_position,
            shortcut_min_candidates: self.shortcut_min,
            cache_row_limit: self.cache_rows,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short = 'n', long, default_value = "6")]
        max_guesses: usize,
    },

    /// Analyze the entropy of a word against the dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Suggest the next guess from rounds already played
    Suggest {
        /// Rounds as guess=feedback, e.g. crane=-y--g
        rounds: Vec<String>,
    },

    /// Show the opening word
    Opening,
}

fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    info!("Loaded {} words", words.len());

    let config = cli.solver_config();
    let mut guesser = match cli.seed {
        Some(seed) => Guesser::with_rng(&words, config, StdRng::seed_from_u64(seed)),
        None => Guesser::new(&words, config),
    }
    .context("Failed to initialise the solver")?;

    match cli.command {
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => {
            let config = SolveConfig {
                target: word,
                max_guesses,
            };
            let result = solve_word(config, &mut guesser)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, guesser.dictionary().words())?;
            print_analysis_result(&result);
        }
        Commands::Suggest { rounds } => {
            let rounds = rounds
                .iter()
                .map(|round| parse_round(round, cli.scheme))
                .collect::<Result<Vec<_>, _>>()?;
            let suggestion = suggest_next(&rounds, &mut guesser);
            print_suggestion(&rounds, &suggestion);
        }
        Commands::Opening => {
            print_opening(
                guesser.opening(),
                guesser.opening_entropy(),
                guesser.dictionary().len(),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_match_default_config() {
        let cli = Cli::try_parse_from(["wordle_trie", "opening"]).unwrap();
        assert_eq!(cli.solver_config(), SolverConfig::default());
    }

    #[test]
    fn every_threshold_is_configurable() {
        let cli = Cli::try_parse_from([
            "wordle_trie",
            "opening",
            "--wide-set",
            "20",
            "--tolerance",
            "0.25",
            "--late-round",
            "4",
            "--letters-per-position",
            "2",
            "--shortcut-min",
            "3",
            "--cache-rows",
            "100",
        ])
        .unwrap();

        let config = cli.solver_config();
        assert_eq!(config.wide_set_threshold, 20);
        assert!((config.entropy_tolerance - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.late_round, 4);
        assert_eq!(config.letters_per_position, 2);
        assert_eq!(config.shortcut_min_candidates, 3);
        assert_eq!(config.cache_row_limit, Some(100));
    }
}
