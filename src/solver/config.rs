//! Tunable thresholds for guess selection

/// Thresholds steering the guess strategist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// At or above this many candidates, guess a synthetic probe instead of scoring candidates
    pub wide_set_threshold: usize,
    /// Accept a scored guess when its entropy is within this many bits of `log2(candidates)`
    pub entropy_tolerance: f64,
    /// From this many guesses on, accept the scored guess unconditionally and stop adding shortcuts
    pub late_round: usize,
    /// Top letters per position combined into probe words
    pub letters_per_position: usize,
    /// A shortcut probe is only tried with more candidates than this
    pub shortcut_min_candidates: usize,
    /// Maximum number of source rows kept in the pattern cache (`None` = unbounded)
    pub cache_row_limit: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wide_set_threshold: 50,
            entropy_tolerance: 0.5,
            late_round: 5,
            letters_per_position: 3,
            shortcut_min_candidates: 2,
            cache_row_limit: None,
        }
    }
}
