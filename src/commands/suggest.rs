//! Next-guess suggestion command
//!
//! Replays rounds played outside the solver and proposes what to guess next.

use super::CommandError;
use crate::core::{FeedbackScheme, Pattern, Word, parse_feedback};
use crate::solver::{GamePhase, Guess, Guesser};
use rand::Rng;

/// Candidates listed alongside a suggestion
const PREVIEW_LEN: usize = 10;

/// A guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Result of replaying rounds
pub struct Suggestion {
    /// Candidate count after each replayed round
    pub remaining_after: Vec<usize>,
    pub phase: GamePhase,
    /// First few remaining candidates, in trie order
    pub preview: Vec<String>,
    pub remaining: usize,
    /// `None` once the game is solved
    pub next: Option<Guess>,
}

/// Parse a round written as `guess=feedback`, e.g. `crane=gy..g`
///
/// # Errors
///
/// Returns an error if the separator is missing, the guess is not a valid
/// word, or the feedback does not parse under `scheme`.
pub fn parse_round(text: &str, scheme: FeedbackScheme) -> Result<Round, CommandError> {
    let (guess, feedback) = text
        .split_once('=')
        .ok_or_else(|| CommandError::MalformedRound(text.to_string()))?;

    Ok(Round {
        guess: Word::new(guess.trim())?,
        pattern: parse_feedback(feedback.trim(), scheme)?,
    })
}

/// Start a fresh game, replay `rounds` and suggest the next guess
pub fn suggest_next<R: Rng>(rounds: &[Round], guesser: &mut Guesser<R>) -> Suggestion {
    guesser.restart_game();

    let remaining_after = rounds
        .iter()
        .map(|round| guesser.observe(round.guess.clone(), round.pattern))
        .collect();

    let candidates = guesser.candidates();
    let remaining = candidates.len();
    let preview = candidates
        .iter()
        .take(PREVIEW_LEN)
        .map(|w| w.text().to_string())
        .collect();

    let phase = guesser.phase();
    let next = (phase != GamePhase::Solved).then(|| guesser.next_guess());

    Suggestion {
        remaining_after,
        phase,
        preview,
        remaining,
        next,
    }
}
