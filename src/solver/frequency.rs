//! Letter frequency analysis and synthetic probe words
//!
//! Probes are built from the letters that are most common at each position
//! of the current candidates. They do not have to be dictionary words.

use crate::core::{WORD_LEN, Word};
use itertools::Itertools;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

/// Absolute and per-position letter counts over a word set
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencies {
    absolute: FxHashMap<u8, usize>,
    positional: [FxHashMap<u8, usize>; WORD_LEN],
}

impl LetterFrequencies {
    /// Count letters across `words`
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut frequencies = Self::default();

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                *frequencies.absolute.entry(letter).or_insert(0) += 1;
                *frequencies.positional[position].entry(letter).or_insert(0) += 1;
            }
        }

        frequencies
    }

    /// Occurrences of `letter` anywhere
    #[must_use]
    pub fn absolute(&self, letter: u8) -> usize {
        self.absolute.get(&letter).copied().unwrap_or(0)
    }

    /// Occurrences of `letter` at `position`
    #[must_use]
    pub fn at(&self, position: usize, letter: u8) -> usize {
        self.positional[position].get(&letter).copied().unwrap_or(0)
    }

    /// Every letter seen, alphabetically
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.absolute.keys().copied().sorted_unstable().collect()
    }

    /// The `n` most frequent letters at `position`
    #[must_use]
    pub fn top_at(&self, position: usize, n: usize) -> Vec<u8> {
        most_common(&self.positional[position], n)
    }

    /// The `n` most frequent letters overall
    #[must_use]
    pub fn top_overall(&self, n: usize) -> Vec<u8> {
        most_common(&self.absolute, n)
    }
}

/// Highest counts first, ties alphabetical
fn most_common(counts: &FxHashMap<u8, usize>, n: usize) -> Vec<u8> {
    counts
        .iter()
        .sorted_unstable_by_key(|&(&letter, &count)| (Reverse(count), letter))
        .take(n)
        .map(|(&letter, _)| letter)
        .collect()
}

/// Probe words mixing the top letters of each position
///
/// Takes the `per_position` most frequent letters at every position and keeps
/// each combination whose five letters are all different. When no such
/// combination exists, falls back to the five most frequent letters overall.
/// Returns nothing if fewer than five distinct letters were seen.
///
/// # Examples
/// ```
/// use wordle_trie::core::Word;
/// use wordle_trie::solver::frequency::{LetterFrequencies, synthesize_opening_candidates};
///
/// let words: Vec<Word> = ["angle", "ankle", "agile"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let frequencies = LetterFrequencies::from_words(&words);
/// let probes = synthesize_opening_candidates(&frequencies, 3);
///
/// assert!(probes.iter().all(|p| p.text().starts_with('a')));
/// ```
#[must_use]
pub fn synthesize_opening_candidates(
    frequencies: &LetterFrequencies,
    per_position: usize,
) -> Vec<Word> {
    let candidates: Vec<Word> = (0..WORD_LEN)
        .map(|position| frequencies.top_at(position, per_position))
        .multi_cartesian_product()
        .filter(|combination| combination.iter().all_unique())
        .filter_map(letters_to_word)
        .collect();

    if !candidates.is_empty() {
        return candidates;
    }

    letters_to_word(frequencies.top_overall(WORD_LEN))
        .into_iter()
        .collect()
}

/// One probe covering the letters that are still undetermined
///
/// Undetermined letters appear in the remaining candidates but are not yet
/// known to be in the target. When there are at most five of them, they are
/// shuffled into a word and padded with random repeats. More than five
/// (or none) yields `None`.
pub fn synthesize_shortcut_word<R: Rng + ?Sized>(
    frequencies: &LetterFrequencies,
    known_letters: &FxHashSet<u8>,
    rng: &mut R,
) -> Option<Word> {
    let mut undetermined: Vec<u8> = frequencies
        .letters()
        .into_iter()
        .filter(|letter| !known_letters.contains(letter))
        .collect();

    if undetermined.is_empty() || undetermined.len() > WORD_LEN {
        return None;
    }

    undetermined.shuffle(rng);

    let mut letters = [0u8; WORD_LEN];
    for (i, slot) in letters.iter_mut().enumerate() {
        *slot = match undetermined.get(i) {
            Some(&letter) => letter,
            None => *undetermined.choose(rng)?,
        };
    }

    Word::from_letters(letters).ok()
}

fn letters_to_word(letters: Vec<u8>) -> Option<Word> {
    let letters: [u8; WORD_LEN] = letters.try_into().ok()?;
    Word::from_letters(letters).ok()
}
