//! Command implementations

pub mod analyze;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{Round, Suggestion, parse_round, suggest_next};

use crate::core::{FeedbackError, WordError};
use crate::solver::SolverError;
use thiserror::Error;

/// Error type for command failures
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Word '{0}' is not in the dictionary")]
    NotInDictionary(String),
    #[error("Invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("Round '{0}' must look like guess=feedback")]
    MalformedRound(String),
    #[error(transparent)]
    Solver(#[from] SolverError),
}
