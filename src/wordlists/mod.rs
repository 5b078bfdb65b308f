//! Dictionary word lists
//!
//! Reads a plain one-word-per-line dictionary and keeps only the words that
//! can be guessed with the current letter pool.

pub mod loader;

pub use loader::{DEFAULT_DICTIONARY_PATH, filter_dictionary, filter_lines};
