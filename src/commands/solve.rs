//! Word solving command
//!
//! Plays a full game against a known target and returns the solution path.

use super::CommandError;
use crate::core::{Pattern, Word};
use crate::solver::{GuessKind, Guesser};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub kind: GuessKind,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
}

/// Solve a specific word, feeding back the pattern each guess earns
///
/// Starts a fresh game on `guesser`; its opening word and pattern cache
/// carry over from earlier games.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the solver's dictionary
pub fn solve_word<R: Rng>(
    config: SolveConfig,
    guesser: &mut Guesser<R>,
) -> Result<SolveResult, CommandError> {
    let target = Word::new(&config.target)?;
    if !guesser.dictionary().contains(&target) {
        return Err(CommandError::NotInDictionary(target.text().to_string()));
    }

    guesser.restart_game();
    let mut guesses = Vec::with_capacity(config.max_guesses);

    for _ in 0..config.max_guesses {
        let candidates_before = guesser.candidates().len();
        let guess = guesser.next_guess();
        let pattern = Pattern::calculate(&guess.word, &target);

        let candidates_after = guesser.record_feedback(pattern)?;

        guesses.push(GuessStep {
            word: guess.word.text().to_string(),
            kind: guess.kind,
            pattern,
            candidates_before,
            candidates_after,
            entropy: guess.entropy,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}
