//! Terminal output
//!
//! Exact player-facing wording for every game event, and a printer that
//! optionally colours it.

pub mod display;
pub mod messages;

pub use display::Printer;
pub use messages::{NO_VALID_WORDS, WELCOME, final_message, instructions, outcome_message};
