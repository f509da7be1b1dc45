//! Candidate word storage
//!
//! The candidate set lives in a prefix tree that is pruned round by round.

mod trie;

pub use trie::CandidateTrie;
