//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use super::CommandError;
use crate::core::Word;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub in_dictionary: bool,
}

/// Analyze the entropy of a word against a set of candidates
///
/// Any five-letter word can be analyzed; probes need not be dictionary words.
///
/// # Errors
///
/// Returns an error if the word is not 5 ASCII letters.
pub fn analyze_word(word: &str, candidates: &[Word]) -> Result<AnalysisResult, CommandError> {
    let word = Word::new(word)?;
    let metrics = calculate_metrics(&word, candidates);

    Ok(AnalysisResult {
        in_dictionary: candidates.contains(&word),
        word: word.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}
