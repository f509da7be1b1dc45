//! Word lists
//!
//! A small embedded dictionary for demos and tests, plus loading of
//! user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
