//! Unscramble
//!
//! A word-unscrambling game: make as many dictionary words as possible from a
//! fixed pool of letters. Each new word scores its length, plus a bonus for
//! using every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::{GuessOutcome, LetterPool};
//! use unscramble::game::{CandidateSet, Session};
//! use unscramble::wordlists::filter_lines;
//!
//! let pool = LetterPool::new("CATDOG").unwrap();
//! let words = filter_lines("cat\ndog\ncatdog\nca't\n\n".as_bytes(), &pool, 3).unwrap();
//! assert_eq!(words, ["CAT", "DOG", "CATDOG"]);
//!
//! let mut session = Session::new(&pool, 3, CandidateSet::new(words));
//! assert!(session.guess("cat").is_success());
//! assert_eq!(session.guess("CAT"), GuessOutcome::AlreadyGuessed);
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod wordlists;

// Guess session
pub mod game;

// Command-line configuration
pub mod config;

// Terminal output formatting
pub mod output;
