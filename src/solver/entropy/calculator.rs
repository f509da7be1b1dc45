//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and set of targets, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining targets after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining targets)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against targets, without caching
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_trie::core::Word;
/// use wordle_trie::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("angle").unwrap();
/// let targets = vec![
///     Word::new("angle").unwrap(),
///     Word::new("ankle").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &targets);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equally likely outcomes
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, targets: &[Word]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_pattern(guess, targets))
}

/// Group targets by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, targets: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for target in targets {
        let pattern = Pattern::calculate(guess, target);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// Terms are summed smallest count first, so two distributions with the same
/// partition sizes get bit-identical entropies regardless of hash order.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use wordle_trie::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
/// use wordle_trie::core::Pattern;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::new(0), 25);
/// uniform.insert(Pattern::new(1), 25);
/// uniform.insert(Pattern::new(2), 25);
/// uniform.insert(Pattern::new(3), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let mut counts: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    counts.sort_unstable();

    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}

/// Calculate entropy, expected remaining targets and worst-case partition
pub fn calculate_metrics(guess: &Word, targets: &[Word]) -> GuessMetrics {
    if targets.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let groups = group_by_pattern(guess, targets);
    let total = targets.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 1);
        counts.insert(Pattern::new(1), 1);
        counts.insert(Pattern::new(2), 1);
        counts.insert(Pattern::new(3), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for (value, count) in [(0, 97), (1, 1), (2, 1), (3, 1)] {
            uniform.insert(Pattern::new(value), 25);
            skewed.insert(Pattern::new(value), count);
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn same_partition_sizes_same_bits() {
        let mut first = FxHashMap::default();
        first.insert(Pattern::new(5), 3);
        first.insert(Pattern::new(80), 1);
        first.insert(Pattern::new(200), 2);

        let mut second = FxHashMap::default();
        second.insert(Pattern::new(7), 2);
        second.insert(Pattern::new(1), 3);
        second.insert(Pattern::new(242), 1);

        assert_eq!(
            shannon_entropy(&first).to_bits(),
            shannon_entropy(&second).to_bits()
        );
    }

    #[test]
    fn calculate_entropy_bounded_by_log_targets() {
        let targets = words(&["apple", "angle", "ankle", "axles", "agile"]);
        let bound = (targets.len() as f64).log2();

        for guess in &targets {
            let entropy = calculate_entropy(guess, &targets);
            assert!(entropy >= 0.0);
            assert!(entropy <= bound + 1e-9);
        }
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let targets = words(&["aaaaa", "bbbbb", "ccccc"]);
        assert!(calculate_entropy(&guess, &targets).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_targets() {
        let guess = Word::new("angle").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_partition_sizes() {
        // ZZZZZ sends every target to the all-absent pattern
        let targets = words(&["aaaaa", "bbbbb", "ccccc"]);
        let metrics = calculate_metrics(&Word::new("zzzzz").unwrap(), &targets);
        assert_eq!(metrics.max_partition, 3);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-9);

        let distinct = calculate_metrics(&Word::new("abcde").unwrap(), &targets);
        assert_eq!(distinct.max_partition, 1);
        assert!((distinct.entropy - 3f64.log2()).abs() < 1e-9);
    }
}
