//! Entropy-maximizing guess selection
//!
//! Scores every source word against the targets and keeps the best one.

use super::cache::PatternCache;
use super::calculator::shannon_entropy;
use crate::core::{Pattern, WORD_LEN, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Entropy of one source plus the patterns that were missing from the cache
type Scored = (f64, Vec<([u8; WORD_LEN], Pattern)>);

/// Select the source with the highest entropy over `targets`
///
/// Sources are scored in parallel. Workers only read the cache and hand back
/// the patterns they had to compute; those are merged afterwards, so the
/// cache has a single writer. Ties keep the earliest source. Empty `targets`
/// yields the first source with 0 bits; empty `sources` yields `None`.
///
/// # Examples
/// ```
/// use wordle_trie::core::Word;
/// use wordle_trie::solver::entropy::{PatternCache, best_guess};
///
/// let sources = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("angle").unwrap(),
/// ];
/// let targets = vec![
///     Word::new("angle").unwrap(),
///     Word::new("ankle").unwrap(),
/// ];
///
/// let mut cache = PatternCache::new();
/// let (best, entropy) = best_guess(&sources, &targets, &mut cache).unwrap();
/// assert_eq!(best.text(), "angle");
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
pub fn best_guess<'a>(
    sources: &'a [Word],
    targets: &[Word],
    cache: &mut PatternCache,
) -> Option<(&'a Word, f64)> {
    let first = sources.first()?;
    if targets.is_empty() {
        return Some((first, 0.0));
    }

    let scored: Vec<Scored> = {
        let cache = &*cache;
        sources
            .par_iter()
            .map(|source| score_source(source, targets, cache))
            .collect()
    };

    let mut best: Option<(&Word, f64)> = None;
    for (source, (entropy, computed)) in sources.iter().zip(scored) {
        if !computed.is_empty() {
            cache.extend_row(source, computed);
        }
        if best.is_none_or(|(_, top)| entropy > top) {
            best = Some((source, entropy));
        }
    }

    best
}

fn score_source(source: &Word, targets: &[Word], cache: &PatternCache) -> Scored {
    let row = cache.row(source);
    let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();
    let mut computed = Vec::new();

    for target in targets {
        let pattern = match row.and_then(|r| r.get(target.chars())) {
            Some(&pattern) => pattern,
            None => {
                let pattern = Pattern::calculate(source, target);
                computed.push((*target.chars(), pattern));
                pattern
            }
        };
        *counts.entry(pattern).or_insert(0) += 1;
    }

    (shannon_entropy(&counts), computed)
}
