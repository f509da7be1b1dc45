//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LEN, Word};

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is played and `target` is the hidden word
    ///
    /// Duplicate letters follow the game's rules: exact matches are marked
    /// first, then present marks consume the target letters that are left,
    /// so a doubled guess letter matching one target letter is marked once.
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Word, Pattern};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("angle").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// // A(exact) P(absent) P(absent) L(exact) E(exact)
    /// // 2 + 0×3 + 0×9 + 2×27 + 2×81 = 218
    /// assert_eq!(pattern.value(), 218);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [0u8; WORD_LEN];
        let mut available = target.letter_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = 2;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            let slot = &mut available[usize::from(g - b'a')];
            if result[i] == 0 && *slot > 0 {
                result[i] = 1;
                *slot -= 1;
            }
        }

        Self::encode(result)
    }

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        Self::encode(marks.map(Mark::digit))
    }

    /// Mark at a single position (0-4)
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        let mut val = self.0;
        for _ in 0..position {
            val /= 3;
        }
        Mark::from_digit(val % 3)
    }

    /// All per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        std::array::from_fn(|i| self.mark(i))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Mark, Pattern};
    ///
    /// let p = Pattern::from_marks([
    ///     Mark::Exact, Mark::Present, Mark::Absent, Mark::Exact, Mark::Present,
    /// ]);
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }

    fn encode(digits: [u8; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            pattern += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.marks(), [Mark::Exact; WORD_LEN]);
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.marks(), [Mark::Absent; WORD_LEN]);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for w in ["apple", "angle", "ankle", "axles", "agile", "zzzzz"] {
            let w = word(w);
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_within_range() {
        let words = ["apple", "angle", "ankle", "axles", "agile", "speed", "erase"];
        for a in words {
            for b in words {
                let value = Pattern::calculate(&word(a), &word(b)).value();
                assert!(usize::from(value) < Pattern::COUNT);
            }
        }
    }

    #[test]
    fn pattern_direction_matters() {
        let forward = Pattern::calculate(&word("axles"), &word("angle"));
        let backward = Pattern::calculate(&word("angle"), &word("axles"));
        assert_ne!(forward, backward);
    }

    #[test]
    fn doubled_guess_letter_marked_once() {
        // SPEED vs ABIDE: only one E in the target, so only the first E is present
        let pattern = Pattern::calculate(&word("speed"), &word("abide"));
        assert_eq!(
            pattern.marks(),
            [
                Mark::Absent,
                Mark::Absent,
                Mark::Present,
                Mark::Absent,
                Mark::Present,
            ]
        );
    }

    #[test]
    fn exact_match_consumes_before_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        let pattern = Pattern::calculate(&word("robot"), &word("floor"));
        // R(present)=1, O(present)=1, B=0, O(exact)=2, T=0 → 1 + 3 + 54 = 58
        assert_eq!(pattern.value(), 58);
    }

    #[test]
    fn marks_round_trip_through_value() {
        let marks = [
            Mark::Present,
            Mark::Exact,
            Mark::Exact,
            Mark::Present,
            Mark::Absent,
        ];
        let pattern = Pattern::from_marks(marks);
        // 1 + 2×3 + 2×9 + 1×27 = 52
        assert_eq!(pattern.value(), 52);
        assert_eq!(pattern.marks(), marks);
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Pattern::new(0).to_emoji(), "⬜⬜⬜⬜⬜");
        assert_eq!(Pattern::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
