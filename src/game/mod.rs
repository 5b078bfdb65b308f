//! The guessing game
//!
//! Candidate tracking, per-guess classification and the input loop.

mod candidates;
mod runner;
mod session;

pub use candidates::{CandidateSet, Claim};
pub use runner::run_session;
pub use session::Session;
