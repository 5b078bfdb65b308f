//! Player-facing message text

use crate::core::{GuessOutcome, LetterPool};

/// First line printed when a game starts
pub const WELCOME: &str = "Welcome to UQunscramble!";

/// Printed at the end of a game in which nothing scored
pub const NO_VALID_WORDS: &str = "No valid words guessed!";

/// Explain what the player should type
#[must_use]
pub fn instructions(pool: &LetterPool, min_length: usize) -> String {
    format!(
        "Enter words of length {min_length} to {} made from the letters \"{}\"",
        pool.len(),
        pool.letters()
    )
}

/// Feedback line for one guess
#[must_use]
pub fn outcome_message(outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::TooShort { min_length } => {
            format!("Too short! At least {min_length} characters expected")
        }
        GuessOutcome::TooLong { max_length } => {
            format!("Word must be no more than {max_length} characters long")
        }
        GuessOutcome::InvalidCharacters => {
            "Your word must contain only uppercase and/or lowercase letters".to_string()
        }
        GuessOutcome::CannotBeFormed => "Word cannot be formed with available letters".to_string(),
        GuessOutcome::AlreadyGuessed => "Word has been guessed earlier".to_string(),
        GuessOutcome::NotInDictionary => "Word not found in dictionary".to_string(),
        GuessOutcome::NewlyGuessed { score, .. } => format!("Good! Your score so far is {score}"),
    }
}

/// Closing line for a finished game
#[must_use]
pub fn final_message(score: u32) -> String {
    if score == 0 {
        NO_VALID_WORDS.to_string()
    } else {
        format!("Your final score is {score}")
    }
}
