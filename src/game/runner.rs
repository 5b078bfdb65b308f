//! Line-oriented session loop

use super::Session;
use crate::core::GuessOutcome;
use log::debug;
use std::io::{self, BufRead};

/// Feed every input line to `session` until end of input
///
/// `report` is called exactly once per line with its outcome. No outcome ends
/// the loop early; only end of input or an I/O error does. Lines are read as
/// raw bytes with no length limit.
///
/// Returns the final score.
///
/// # Errors
///
/// Returns an I/O error if reading input fails or if `report` fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use unscramble::core::LetterPool;
/// use unscramble::game::{CandidateSet, Session, run_session};
///
/// let pool = LetterPool::new("CATDOG").unwrap();
/// let mut session = Session::new(&pool, 3, CandidateSet::new(vec!["DOG".into()]));
/// let mut outcomes = Vec::new();
///
/// let score = run_session(&mut session, Cursor::new("dog\nxyz\n"), |outcome| {
///     outcomes.push(outcome);
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(score, 3);
/// assert_eq!(outcomes.len(), 2);
/// ```
pub fn run_session<R, F>(
    session: &mut Session<'_>,
    mut input: R,
    mut report: F,
) -> io::Result<u32>
where
    R: BufRead,
    F: FnMut(GuessOutcome) -> io::Result<()>,
{
    let mut line = Vec::new();
    let mut guesses = 0usize;

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        guesses += 1;
        report(session.guess(&line))?;
    }

    debug!(
        "Session over after {guesses} guesses: {} of {} candidates found, score {}",
        session.candidates().guessed_count(),
        session.candidates().len(),
        session.score()
    );
    Ok(session.score())
}
