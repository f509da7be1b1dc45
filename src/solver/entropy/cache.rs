//! Memoized feedback patterns
//!
//! Patterns depend only on the two words involved, so one cache serves every
//! game the solver plays. Rows are keyed by the source (guess) word.

use crate::core::{Pattern, WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

type Letters = [u8; WORD_LEN];

/// Pattern row for one source word: target letters → pattern
pub type PatternRow = FxHashMap<Letters, Pattern>;

/// Lazily filled `(source, target) → Pattern` table
///
/// Without a row limit the cache grows for the lifetime of the process. With
/// one, the oldest source row is dropped when a new row would exceed it.
#[derive(Debug, Clone, Default)]
pub struct PatternCache {
    rows: FxHashMap<Letters, PatternRow>,
    insertion_order: VecDeque<Letters>,
    row_limit: Option<usize>,
}

impl PatternCache {
    /// Unbounded cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache keeping at most `limit` source rows (at least one)
    #[must_use]
    pub fn with_row_limit(limit: usize) -> Self {
        Self {
            row_limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Pattern for `source` against `target`, computed and stored on a miss
    ///
    /// # Examples
    /// ```
    /// use wordle_trie::core::{Pattern, Word};
    /// use wordle_trie::solver::entropy::PatternCache;
    ///
    /// let mut cache = PatternCache::new();
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("angle").unwrap();
    ///
    /// assert_eq!(cache.pattern(&guess, &target), Pattern::calculate(&guess, &target));
    /// assert_eq!(cache.entry_count(), 1);
    /// ```
    pub fn pattern(&mut self, source: &Word, target: &Word) -> Pattern {
        *self
            .row_mut(source)
            .entry(*target.chars())
            .or_insert_with(|| Pattern::calculate(source, target))
    }

    /// Cached pattern, if present
    #[must_use]
    pub fn get(&self, source: &Word, target: &Word) -> Option<Pattern> {
        self.row(source)?.get(target.chars()).copied()
    }

    /// All cached patterns for `source`
    #[must_use]
    pub fn row(&self, source: &Word) -> Option<&PatternRow> {
        self.rows.get(source.chars())
    }

    /// Merge patterns computed elsewhere into the row for `source`
    pub fn extend_row(&mut self, source: &Word, entries: impl IntoIterator<Item = (Letters, Pattern)>) {
        self.row_mut(source).extend(entries);
    }

    fn row_mut(&mut self, source: &Word) -> &mut PatternRow {
        let key = *source.chars();

        if !self.rows.contains_key(&key) {
            if let Some(limit) = self.row_limit {
                while self.rows.len() >= limit {
                    match self.insertion_order.pop_front() {
                        Some(oldest) => {
                            self.rows.remove(&oldest);
                        }
                        None => break,
                    }
                }
            }
            self.insertion_order.push_back(key);
        }

        self.rows.entry(key).or_default()
    }

    /// Number of source rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cached patterns across rows
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.rows.values().map(FxHashMap::len).sum()
    }

    /// Drop every row
    pub fn clear(&mut self) {
        self.rows.clear();
        self.insertion_order.clear();
    }
}
