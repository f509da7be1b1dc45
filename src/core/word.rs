//! Word representation
//!
//! A Word stores a 5-letter lowercase word both as text and as a byte array.
//! Dictionary words and synthetic probe words share this type.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a word from raw letters
    ///
    /// Used for synthetic probes, which need not be dictionary words.
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` if any byte is not a lowercase ASCII letter.
    pub fn from_letters(chars: [u8; WORD_LEN]) -> Result<Self, WordError> {
        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        // Lowercase ASCII is always valid UTF-8
        let text = chars.iter().map(|&c| char::from(c)).collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }

    /// Per-letter occurrence counts, indexed by `letter - b'a'`
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(word.chars(), b"apple");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("ANGLE").unwrap();
        assert_eq!(word.text(), "angle");

        let word2 = Word::new("AnGlE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ankl3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ankl "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("axlé!"), Err(WordError::NonAscii));
    }

    #[test]
    fn from_letters_builds_text() {
        let word = Word::from_letters(*b"xqzvj").unwrap();
        assert_eq!(word.text(), "xqzvj");
        assert!(Word::from_letters(*b"ab#de").is_err());
        assert!(Word::from_letters(*b"ABCDE").is_err());
    }

    #[test]
    fn letter_queries() {
        let word = Word::new("axles").unwrap();
        assert_eq!(word.chars()[1], b'x');
        assert!(word.has_letter(b's'));
        assert!(!word.has_letter(b'p'));

        let doubled = Word::new("apple").unwrap();
        assert_eq!(doubled.count_of(b'p'), 2);
        assert_eq!(doubled.count_of(b'z'), 0);
    }

    #[test]
    fn letter_counts_indexed_by_alphabet() {
        let counts = Word::new("apple").unwrap().letter_counts();
        assert_eq!(counts[0], 1); // a
        assert_eq!(counts[usize::from(b'p' - b'a')], 2);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("agile").unwrap();
        assert_eq!(format!("{word}"), "agile");
    }
}
