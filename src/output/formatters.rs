//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use crate::solver::GuessKind;
use colored::{ColoredString, Colorize};

/// Render a guess as colored letter tiles, one background per mark
#[must_use]
pub fn colored_tiles(word: &str, pattern: Pattern) -> String {
    word.to_uppercase()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                Mark::Exact => tile.black().on_green().to_string(),
                Mark::Present => tile.black().on_yellow().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Highlight a guess kind
#[must_use]
pub fn kind_label(kind: GuessKind) -> ColoredString {
    let label = kind.to_string();
    match kind {
        GuessKind::Opening | GuessKind::Entropy => label.bright_cyan(),
        GuessKind::LastCandidate => label.green(),
        GuessKind::Shortcut | GuessKind::Probe => label.magenta(),
        GuessKind::Fallback => label.red(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the most a guess could earn against `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let ceiling = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, ceiling, width)
}

/// Upper-case a word for display
#[must_use]
pub fn shout(word: &Word) -> String {
    word.text().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_keep_letters_in_order() {
        let tiles = colored_tiles("angle", Pattern::PERFECT);
        let a = tiles.find('A').unwrap();
        let e = tiles.find('E').unwrap();
        assert!(a < e);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(1.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn entropy_bar_full_at_log_bound() {
        let bar = entropy_bar(3.0, 8, 6);
        assert_eq!(bar, "██████");
    }

    #[test]
    fn entropy_bar_single_candidate() {
        let bar = entropy_bar(0.0, 1, 3);
        assert_eq!(bar, "░░░");
    }
}
