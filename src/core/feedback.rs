//! Feedback string parsing
//!
//! Translates the symbols a game driver reports into a `Pattern`.
//! Malformed feedback is rejected here so the solver only ever sees
//! patterns of the right length.

use super::pattern::{Mark, Pattern};
use super::word::WORD_LEN;
use std::str::FromStr;
use thiserror::Error;

/// Symbol alphabet used to report feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackScheme {
    /// `G`/🟩 exact, `Y`/🟨 present, `-`/`_`/`.`/⬜ absent
    #[default]
    Colors,
    /// `+` absent, `-` present elsewhere, the letter itself when exact
    Marks,
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly {WORD_LEN} symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("Unknown feedback scheme: {0}")]
    UnknownScheme(String),
}

impl FromStr for FeedbackScheme {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "colors" | "colours" | "gy" => Ok(Self::Colors),
            "marks" | "plus-minus" => Ok(Self::Marks),
            other => Err(FeedbackError::UnknownScheme(other.to_string())),
        }
    }
}

impl FeedbackScheme {
    fn mark_for(self, symbol: char) -> Option<Mark> {
        match self {
            Self::Colors => match symbol {
                'G' | 'g' | '🟩' => Some(Mark::Exact),
                'Y' | 'y' | '🟨' => Some(Mark::Present),
                '-' | '_' | '.' | '⬜' | '⬛' => Some(Mark::Absent),
                _ => None,
            },
            Self::Marks => match symbol {
                '+' => Some(Mark::Absent),
                '-' => Some(Mark::Present),
                c if c.is_ascii_alphabetic() => Some(Mark::Exact),
                _ => None,
            },
        }
    }
}

/// Parse a feedback string in the given scheme
///
/// # Errors
/// Returns `FeedbackError` when the string does not have exactly 5 symbols
/// or contains a symbol the scheme does not know.
///
/// # Examples
/// ```
/// use wordle_trie::core::{FeedbackScheme, Pattern, parse_feedback};
///
/// let colors = parse_feedback("GY-GY", FeedbackScheme::Colors).unwrap();
/// let emoji = parse_feedback("🟩🟨⬜🟩🟨", FeedbackScheme::Colors).unwrap();
/// let marks = parse_feedback("a-+l-", FeedbackScheme::Marks).unwrap();
/// assert_eq!(colors, emoji);
/// assert_eq!(colors, marks);
/// ```
pub fn parse_feedback(text: &str, scheme: FeedbackScheme) -> Result<Pattern, FeedbackError> {
    let symbols: Vec<char> = text.trim().chars().collect();

    if symbols.len() != WORD_LEN {
        return Err(FeedbackError::InvalidLength(symbols.len()));
    }

    let mut marks = [Mark::Absent; WORD_LEN];
    for (position, (&symbol, slot)) in symbols.iter().zip(marks.iter_mut()).enumerate() {
        *slot = scheme
            .mark_for(symbol)
            .ok_or(FeedbackError::InvalidSymbol { symbol, position })?;
    }

    Ok(Pattern::from_marks(marks))
}

impl FromStr for Pattern {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_feedback(s, FeedbackScheme::Colors)
    }
}
