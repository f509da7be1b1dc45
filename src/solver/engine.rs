//! Guess strategist
//!
//! Plays one game at a time: proposes a guess, takes the feedback for it,
//! prunes the candidate trie and proposes the next one. The dictionary trie,
//! the opening word and the pattern cache outlive individual games.

use super::config::SolverConfig;
use super::entropy::{PatternCache, best_guess};
use super::frequency::{LetterFrequencies, synthesize_opening_candidates, synthesize_shortcut_word};
use crate::candidates::CandidateTrie;
use crate::core::{Constraints, Pattern, WORD_LEN, Word};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Random draws from previous guesses before widening to the whole alphabet
const FALLBACK_ATTEMPTS: usize = 32;

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Nothing guessed yet this game
    NoGuessYet,
    /// A guess was made and candidates remain
    AwaitingFeedback,
    /// Perfect feedback received
    Solved,
    /// Feedback left no candidate; guesses are best effort from here on
    Exhausted,
}

/// How a guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    /// Precomputed opening word
    Opening,
    /// Only one candidate was left
    LastCandidate,
    /// Highest-entropy candidate
    Entropy,
    /// Synthetic word covering the undetermined letters
    Shortcut,
    /// Synthetic word built from per-position letter frequencies
    Probe,
    /// Random letters from earlier guesses
    Fallback,
}

impl fmt::Display for GuessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Opening => "opening",
            Self::LastCandidate => "last candidate",
            Self::Entropy => "entropy",
            Self::Shortcut => "shortcut",
            Self::Probe => "probe",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A proposed guess
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub word: Word,
    pub kind: GuessKind,
    /// Entropy over the candidates at the time, when it was scored
    pub entropy: Option<f64>,
}

/// Error type for solver misuse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("Dictionary contains no words")]
    EmptyDictionary,
    #[error("Feedback received before any guess was made")]
    NoGuessYet,
}

/// Trie-pruning, entropy-maximizing solver
///
/// The random source drives shortcut shuffling and fallback guesses; pass a
/// seeded one through [`Guesser::with_rng`] for reproducible games.
pub struct Guesser<R = StdRng> {
    config: SolverConfig,
    dictionary: CandidateTrie,
    opening: Word,
    opening_entropy: f64,
    cache: PatternCache,
    rng: R,

    history: Vec<Word>,
    known_letters: FxHashSet<u8>,
    working: Option<CandidateTrie>,
    phase: GamePhase,
}

impl Guesser<StdRng> {
    /// Create a solver seeded from the operating system
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` when `words` is empty.
    pub fn new(words: &[Word], config: SolverConfig) -> Result<Self, SolverError> {
        Self::with_rng(words, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Guesser<R> {
    /// Create a solver with an explicit random source
    ///
    /// Builds the dictionary trie and computes the opening word, which is
    /// reused by every game this solver plays.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyDictionary` when `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_trie::core::Word;
    /// use wordle_trie::solver::{GamePhase, Guesser, SolverConfig};
    ///
    /// let words: Vec<Word> = ["apple", "angle", "ankle", "axles", "agile"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut guesser =
    ///     Guesser::with_rng(&words, SolverConfig::default(), StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let first = guesser.next_guess();
    /// assert_eq!(&first.word, guesser.opening());
    /// assert_eq!(guesser.phase(), GamePhase::AwaitingFeedback);
    /// ```
    pub fn with_rng(words: &[Word], config: SolverConfig, rng: R) -> Result<Self, SolverError> {
        let dictionary = CandidateTrie::build(words);
        if dictionary.is_empty() {
            return Err(SolverError::EmptyDictionary);
        }

        let mut cache = config
            .cache_row_limit
            .map_or_else(PatternCache::new, PatternCache::with_row_limit);

        let targets = dictionary.words();
        let frequencies = LetterFrequencies::from_words(targets);
        let (opening, opening_entropy) =
            synthetic_probe(targets, &frequencies, config.letters_per_position, &mut cache)
                .or_else(|| best_guess(targets, targets, &mut cache).map(|(w, e)| (w.clone(), e)))
                .ok_or(SolverError::EmptyDictionary)?;

        info!(
            "Opening word {opening} ({opening_entropy:.3} bits over {} words)",
            dictionary.len()
        );

        Ok(Self {
            config,
            dictionary,
            opening,
            opening_entropy,
            cache,
            rng,
            history: Vec::new(),
            known_letters: FxHashSet::default(),
            working: None,
            phase: GamePhase::NoGuessYet,
        })
    }

    /// Start a new game, keeping the opening word and pattern cache
    pub fn restart_game(&mut self) {
        self.history.clear();
        self.known_letters.clear();
        self.working = None;
        self.phase = GamePhase::NoGuessYet;
    }

    /// Propose the next guess and record it in the history
    ///
    /// The returned word is never one already guessed this game.
    pub fn next_guess(&mut self) -> Guess {
        let proposal = if self.history.is_empty() {
            Some(Guess {
                word: self.opening.clone(),
                kind: GuessKind::Opening,
                entropy: Some(self.opening_entropy),
            })
        } else {
            self.choose()
        };

        let guess = match proposal {
            Some(guess) if !self.history.contains(&guess.word) => guess,
            Some(repeated) => {
                warn!("{} was already guessed, falling back", repeated.word);
                self.fallback_guess()
            }
            None => self.fallback_guess(),
        };

        debug!(
            "Guess {}: {} ({}, {} candidates)",
            self.history.len() + 1,
            guess.word,
            guess.kind,
            self.candidates().len()
        );

        self.history.push(guess.word.clone());
        if self.phase == GamePhase::NoGuessYet {
            self.phase = GamePhase::AwaitingFeedback;
        }

        guess
    }

    /// Apply feedback for the most recent guess
    ///
    /// Returns the number of candidates left. Zero means the feedback
    /// contradicts the dictionary; the phase becomes `Exhausted`.
    ///
    /// # Errors
    /// Returns `SolverError::NoGuessYet` when nothing has been guessed this game.
    pub fn record_feedback(&mut self, pattern: Pattern) -> Result<usize, SolverError> {
        let guess = self.history.last().cloned().ok_or(SolverError::NoGuessYet)?;
        Ok(self.apply(&guess, pattern))
    }

    /// Apply feedback for a guess made outside the solver
    ///
    /// The guess is appended to the history unless it is already the latest entry.
    pub fn observe(&mut self, guess: Word, pattern: Pattern) -> usize {
        if self.history.last() != Some(&guess) {
            self.history.push(guess.clone());
        }
        self.apply(&guess, pattern)
    }

    fn apply(&mut self, guess: &Word, pattern: Pattern) -> usize {
        let constraints = Constraints::from_feedback(guess, pattern);
        self.known_letters.extend(constraints.known_letters());

        let parent = self.working.as_ref().unwrap_or(&self.dictionary);
        let before = parent.len();
        let next = parent.filter(&constraints);
        let remaining = next.len();

        debug!(
            "{guess} {}: {before} -> {remaining} candidates",
            pattern.to_emoji()
        );

        self.phase = if pattern.is_perfect() {
            GamePhase::Solved
        } else if remaining == 0 {
            warn!("No candidate matches the feedback for {guess}");
            GamePhase::Exhausted
        } else {
            GamePhase::AwaitingFeedback
        };
        self.working = Some(next);

        remaining
    }

    /// Pick a guess from the current candidates
    fn choose(&mut self) -> Option<Guess> {
        let candidates = match &self.working {
            Some(trie) => trie.words(),
            None => self.dictionary.words(),
        };
        let count = candidates.len();

        match count {
            0 => return None,
            1 => {
                return Some(Guess {
                    word: candidates[0].clone(),
                    kind: GuessKind::LastCandidate,
                    entropy: None,
                });
            }
            _ => {}
        }

        let round = self.history.len();
        let frequencies = LetterFrequencies::from_words(candidates);
        let mut scored = None;

        if count < self.config.wide_set_threshold {
            let shortcut = if count > self.config.shortcut_min_candidates
                && round < self.config.late_round
            {
                synthesize_shortcut_word(&frequencies, &self.known_letters, &mut self.rng)
            } else {
                None
            };

            let mut sources = candidates.to_vec();
            sources.extend(shortcut);

            if let Some((best, entropy)) = best_guess(&sources, candidates, &mut self.cache) {
                let kind = if candidates.contains(best) {
                    GuessKind::Entropy
                } else {
                    GuessKind::Shortcut
                };
                let guess = Guess {
                    word: best.clone(),
                    kind,
                    entropy: Some(entropy),
                };

                let ceiling = (count as f64).log2();
                if ceiling - entropy < self.config.entropy_tolerance
                    || round >= self.config.late_round
                {
                    return Some(guess);
                }

                debug!(
                    "{} scores {entropy:.3} of {ceiling:.3} bits, trying a probe",
                    guess.word
                );
                scored = Some(guess);
            }
        }

        synthetic_probe(
            candidates,
            &frequencies,
            self.config.letters_per_position,
            &mut self.cache,
        )
        .map(|(word, entropy)| Guess {
            word,
            kind: GuessKind::Probe,
            entropy: Some(entropy),
        })
        .or(scored)
    }

    /// Random letters from earlier guesses that were not guessed yet
    fn fallback_guess(&mut self) -> Guess {
        let tried: Vec<u8> = self
            .history
            .iter()
            .flat_map(|word| word.chars().iter().copied())
            .collect();
        let alphabet: Vec<u8> = (b'a'..=b'z').collect();

        let mut attempt = 0;
        loop {
            let pool = if tried.is_empty() || attempt >= FALLBACK_ATTEMPTS {
                &alphabet
            } else {
                &tried
            };

            let letters: [u8; WORD_LEN] =
                std::array::from_fn(|_| pool[self.rng.random_range(0..pool.len())]);

            if let Ok(word) = Word::from_letters(letters)
                && !self.history.contains(&word)
            {
                warn!("Falling back to random letters: {word}");
                return Guess {
                    word,
                    kind: GuessKind::Fallback,
                    entropy: None,
                };
            }
            attempt += 1;
        }
    }

    /// Precomputed opening word
    #[must_use]
    pub fn opening(&self) -> &Word {
        &self.opening
    }

    /// Entropy of the opening word over the whole dictionary
    #[must_use]
    pub fn opening_entropy(&self) -> f64 {
        self.opening_entropy
    }

    /// Current game phase
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Guesses made this game, oldest first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Words still consistent with the feedback of this game
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.working
            .as_ref()
            .unwrap_or(&self.dictionary)
            .words()
    }

    /// The full dictionary trie
    #[must_use]
    pub fn dictionary(&self) -> &CandidateTrie {
        &self.dictionary
    }

    /// Pattern cache shared across games
    #[must_use]
    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }
}

/// Best synthetic probe for `targets`, or `None` when no probe can be built
fn synthetic_probe(
    targets: &[Word],
    frequencies: &LetterFrequencies,
    per_position: usize,
    cache: &mut PatternCache,
) -> Option<(Word, f64)> {
    let probes = synthesize_opening_candidates(frequencies, per_position);
    best_guess(&probes, targets, cache).map(|(word, entropy)| (word.clone(), entropy))
}
