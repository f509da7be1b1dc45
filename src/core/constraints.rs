//! Knowledge gained from one round of feedback
//!
//! A `Constraints` value is what the candidate trie filters on. It is built
//! from a guess and the pattern the game returned for it.

use super::pattern::{Mark, Pattern};
use super::word::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter and position facts derived from feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Letters marked absent somewhere in the guess
    pub absent: FxHashSet<u8>,
    /// `(position, letter)` pairs the letter is known not to occupy
    pub misplaced: Vec<(usize, u8)>,
    /// Minimum occurrences required per letter (one per present mark)
    pub min_counts: FxHashMap<u8, usize>,
    /// `(position, letter)` pairs known to be exact
    pub exact: Vec<(usize, u8)>,
    /// A word that can no longer be the target
    pub excluded: Option<Word>,
}

impl Constraints {
    /// Empty constraint set; filtering with it keeps every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate the feedback for `guess` into constraints
    ///
    /// Absent and present marks both rule the letter out at that position.
    /// The guess itself is excluded unless the pattern is perfect.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Constraints, Pattern, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("angle").unwrap();
    /// let constraints = Constraints::from_feedback(&guess, Pattern::calculate(&guess, &target));
    ///
    /// assert!(constraints.absent.contains(&b'p'));
    /// assert!(constraints.exact.contains(&(0, b'a')));
    /// assert_eq!(constraints.excluded, Some(guess));
    /// ```
    #[must_use]
    pub fn from_feedback(guess: &Word, pattern: Pattern) -> Self {
        let mut constraints = Self::new();

        for (position, (&letter, mark)) in guess.chars().iter().zip(pattern.marks()).enumerate() {
            match mark {
                Mark::Absent => {
                    constraints.absent.insert(letter);
                    constraints.misplaced.push((position, letter));
                }
                Mark::Present => {
                    *constraints.min_counts.entry(letter).or_insert(0) += 1;
                    constraints.misplaced.push((position, letter));
                }
                Mark::Exact => constraints.exact.push((position, letter)),
            }
        }

        if !pattern.is_perfect() {
            constraints.excluded = Some(guess.clone());
        }

        constraints
    }

    /// Require `letter` at `position`
    #[must_use]
    pub fn with_exact(mut self, position: usize, letter: u8) -> Self {
        self.exact.push((position, letter));
        self
    }

    /// Forbid `letter` at `position`
    #[must_use]
    pub fn with_misplaced(mut self, position: usize, letter: u8) -> Self {
        self.misplaced.push((position, letter));
        self
    }

    /// Mark `letter` absent
    #[must_use]
    pub fn with_absent(mut self, letter: u8) -> Self {
        self.absent.insert(letter);
        self
    }

    /// Require at least `count` occurrences of `letter`
    #[must_use]
    pub fn with_min_count(mut self, letter: u8, count: usize) -> Self {
        self.min_counts.insert(letter, count);
        self
    }

    /// Exclude one word outright
    #[must_use]
    pub fn excluding(mut self, word: Word) -> Self {
        self.excluded = Some(word);
        self
    }

    /// Absent letter that is neither present nor exact anywhere
    #[must_use]
    pub fn is_globally_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
            && self.min_counts.get(&letter).copied().unwrap_or(0) == 0
            && !self.exact.iter().any(|&(_, l)| l == letter)
    }

    /// Whether `letter` may sit at `position`
    #[must_use]
    pub fn allows_at(&self, position: usize, letter: u8) -> bool {
        !self.is_globally_absent(letter)
            && self
                .exact
                .iter()
                .all(|&(p, l)| p != position || l == letter)
            && !self.misplaced.contains(&(position, letter))
    }

    /// Letters confirmed in the target (present or exact)
    pub fn known_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.min_counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&letter, _)| letter)
            .chain(self.exact.iter().map(|&(_, letter)| letter))
    }

    /// Whole-word check, equivalent to what the trie filter keeps
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if self.excluded.as_ref() == Some(word) {
            return false;
        }

        let positions_ok = word
            .chars()
            .iter()
            .enumerate()
            .all(|(position, &letter)| self.allows_at(position, letter));

        positions_ok
            && self
                .min_counts
                .iter()
                .all(|(&letter, &count)| word.count_of(letter) >= count)
    }
}
