//! Core domain types for the unscramble game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic, apart from the random letter
//! generator which takes its RNG from the caller.

mod outcome;
mod pool;
mod scoring;

pub use outcome::GuessOutcome;
pub use pool::{
    ALPHABET, LetterError, LetterPool, MAX_POOL_LETTERS, MIN_POOL_LETTERS, can_form_word,
};
pub use scoring::{BONUS_POINTS, points_for};
