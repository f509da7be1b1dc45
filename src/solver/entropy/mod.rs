//! Entropy scoring
//!
//! Shannon entropy of the pattern distribution a guess induces over the
//! possible targets, with a pattern cache shared across games.

mod cache;
mod calculator;
mod selector;

pub use cache::{PatternCache, PatternRow};
pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::best_guess;
