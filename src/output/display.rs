//! Writing game events to the terminal

use super::messages::{WELCOME, final_message, instructions, outcome_message};
use crate::core::{GuessOutcome, LetterPool};
use colored::Colorize;
use std::io::{self, Write};

/// Writes game text to an output stream, one line per event
///
/// With colour off the text is written exactly as worded in
/// [`messages`](super::messages); with colour on, only styling is added.
pub struct Printer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    #[must_use]
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print the welcome banner and instructions
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn start(&mut self, pool: &LetterPool, min_length: usize) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", WELCOME.bright_cyan().bold())?;
        } else {
            writeln!(self.out, "{WELCOME}")?;
        }
        writeln!(self.out, "{}", instructions(pool, min_length))?;
        self.out.flush()
    }

    /// Print feedback for one guess
    ///
    /// Flushed straight away so an interactive player sees it before typing again.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn outcome(&mut self, outcome: GuessOutcome) -> io::Result<()> {
        let text = outcome_message(outcome);
        if self.color {
            let styled = match outcome {
                GuessOutcome::NewlyGuessed { .. } => text.green().bold(),
                GuessOutcome::AlreadyGuessed | GuessOutcome::NotInDictionary => text.yellow(),
                _ => text.red(),
            };
            writeln!(self.out, "{styled}")?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()
    }

    /// Print the closing line for a finished game
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn finish(&mut self, score: u32) -> io::Result<()> {
        let text = final_message(score);
        if self.color {
            let styled = if score == 0 {
                text.red().bold()
            } else {
                text.bright_green().bold()
            };
            writeln!(self.out, "{styled}")?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Printer<Vec<u8>> {
        Printer::new(Vec::new(), false)
    }

    fn text(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn start_prints_two_lines() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut printer = plain();
        printer.start(&pool, 3).unwrap();
        assert_eq!(
            text(printer),
            "Welcome to UQunscramble!\nEnter words of length 3 to 6 made from the letters \"CATDOG\"\n"
        );
    }

    #[test]
    fn outcome_is_plain_without_color() {
        let mut printer = plain();
        printer.outcome(GuessOutcome::AlreadyGuessed).unwrap();
        printer
            .outcome(GuessOutcome::NewlyGuessed { points: 3, score: 3 })
            .unwrap();
        assert_eq!(
            text(printer),
            "Word has been guessed earlier\nGood! Your score so far is 3\n"
        );
    }

    #[test]
    fn finish_lines() {
        let mut printer = plain();
        printer.finish(0).unwrap();
        printer.finish(7).unwrap();
        assert_eq!(
            text(printer),
            "No valid words guessed!\nYour final score is 7\n"
        );
    }

    #[test]
    fn colored_output_keeps_wording() {
        let mut printer = Printer::new(Vec::new(), true);
        printer.outcome(GuessOutcome::NotInDictionary).unwrap();
        assert!(text(printer).contains("Word not found in dictionary"));
    }
}
