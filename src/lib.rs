//! Wordle Trie
//!
//! A five-letter word game solver that keeps the remaining candidates in a
//! prefix trie and picks guesses by Shannon entropy, probing with synthetic
//! words built from letter frequencies while many candidates remain.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_trie::core::{Pattern, Word};
//! use wordle_trie::solver::{GamePhase, Guesser, SolverConfig};
//! use wordle_trie::wordlists::{WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let target = Word::new("angle").unwrap();
//! let mut guesser =
//!     Guesser::with_rng(&words, SolverConfig::default(), StdRng::seed_from_u64(42)).unwrap();
//!
//! while guesser.phase() != GamePhase::Solved && guesser.history().len() < 30 {
//!     let guess = guesser.next_guess();
//!     guesser
//!         .record_feedback(Pattern::calculate(&guess.word, &target))
//!         .unwrap();
//! }
//! assert_eq!(guesser.phase(), GamePhase::Solved);
//! ```

// Core domain types
pub mod core;

// Candidate storage and pruning
pub mod candidates;

// Guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
