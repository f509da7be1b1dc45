//! Guess selection
//!
//! Letter frequency analysis, entropy scoring and the per-round strategist
//! that combines them.

mod config;
mod engine;
pub mod entropy;
pub mod frequency;

pub use config::SolverConfig;
pub use engine::{GamePhase, Guess, GuessKind, Guesser, SolverError};
