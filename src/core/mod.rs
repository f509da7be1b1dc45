//! Core domain types
//!
//! Words, feedback patterns, feedback parsing and the constraints derived from
//! feedback. Everything here is pure and deterministic.

mod constraints;
mod feedback;
mod pattern;
mod word;

pub use constraints::Constraints;
pub use feedback::{FeedbackError, FeedbackScheme, parse_feedback};
pub use pattern::{Mark, Pattern};
pub use word::{WORD_LEN, Word, WordError};
