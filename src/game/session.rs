//! Guess session state machine
//!
//! A `Session` classifies one line of input at a time and keeps the running
//! score. It does no I/O; [`run_session`](super::run_session) drives it.

use super::candidates::{CandidateSet, Claim};
use crate::core::{GuessOutcome, LetterPool, points_for};
use log::trace;

/// State for one game
pub struct Session<'a> {
    pool: &'a LetterPool,
    min_length: usize,
    candidates: CandidateSet,
    score: u32,
}

impl<'a> Session<'a> {
    /// Start a session with a zero score and nothing guessed
    #[must_use]
    pub fn new(pool: &'a LetterPool, min_length: usize, candidates: CandidateSet) -> Self {
        Self {
            pool,
            min_length,
            candidates,
            score: 0,
        }
    }

    /// Current score
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Minimum accepted guess length
    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum accepted guess length (the pool size)
    #[inline]
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Classify one line of input and update the score
    ///
    /// A single trailing `\n` is ignored. Checks run in this order: too short,
    /// too long, non-letter characters, not formable from the pool, then the
    /// candidate lookup. Only the first correct guess of a word scores.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::{GuessOutcome, LetterPool};
    /// use unscramble::game::{CandidateSet, Session};
    ///
    /// let pool = LetterPool::new("CATDOG").unwrap();
    /// let candidates = CandidateSet::new(vec!["CAT".into(), "CATDOG".into()]);
    /// let mut session = Session::new(&pool, 3, candidates);
    ///
    /// assert_eq!(session.guess("cat\n"), GuessOutcome::NewlyGuessed { points: 3, score: 3 });
    /// assert_eq!(session.guess("CAT"), GuessOutcome::AlreadyGuessed);
    /// assert_eq!(session.guess("catdog"), GuessOutcome::NewlyGuessed { points: 16, score: 19 });
    /// ```
    pub fn guess(&mut self, line: impl AsRef<[u8]>) -> GuessOutcome {
        let raw = line.as_ref();
        let word = raw.strip_suffix(b"\n").unwrap_or(raw);
        let outcome = self.classify(word);
        trace!("{:?} -> {outcome:?}", String::from_utf8_lossy(word));
        outcome
    }

    fn classify(&mut self, word: &[u8]) -> GuessOutcome {
        let max_length = self.max_length();

        if word.len() < self.min_length {
            return GuessOutcome::TooShort {
                min_length: self.min_length,
            };
        }
        if word.len() > max_length {
            return GuessOutcome::TooLong { max_length };
        }
        if !word.iter().all(u8::is_ascii_alphabetic) {
            return GuessOutcome::InvalidCharacters;
        }

        let normalised: String = word
            .iter()
            .map(|&b| char::from(b.to_ascii_uppercase()))
            .collect();

        if !self.pool.can_form(&normalised) {
            return GuessOutcome::CannotBeFormed;
        }

        match self.candidates.claim(&normalised) {
            Claim::Missing => GuessOutcome::NotInDictionary,
            Claim::AlreadyClaimed => GuessOutcome::AlreadyGuessed,
            Claim::Claimed => {
                let points = points_for(normalised.len(), max_length);
                self.score = self.score.saturating_add(points);
                GuessOutcome::NewlyGuessed {
                    points,
                    score: self.score,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BONUS_POINTS;

    fn candidates(words: &[&str]) -> CandidateSet {
        CandidateSet::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn catdog_session() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["CAT", "DOG", "CATDOG"]));

        assert_eq!(
            session.guess("cat\n"),
            GuessOutcome::NewlyGuessed { points: 3, score: 3 }
        );
        assert_eq!(session.guess("CAT\n"), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.score(), 3);
        assert_eq!(
            session.guess("catdog\n"),
            GuessOutcome::NewlyGuessed {
                points: 6 + BONUS_POINTS,
                score: 19
            }
        );
        assert_eq!(session.guess("xyz\n"), GuessOutcome::CannotBeFormed);
        assert_eq!(session.score(), 19);
    }

    #[test]
    fn length_checks_come_first() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 4, candidates(&[]));

        assert_eq!(
            session.guess("ab"),
            GuessOutcome::TooShort { min_length: 4 }
        );
        assert_eq!(session.guess(""), GuessOutcome::TooShort { min_length: 4 });
        assert_eq!(
            session.guess("12"),
            GuessOutcome::TooShort { min_length: 4 }
        );
        assert_eq!(
            session.guess("catdogs"),
            GuessOutcome::TooLong { max_length: 6 }
        );
        assert_eq!(
            session.guess("1234567"),
            GuessOutcome::TooLong { max_length: 6 }
        );
    }

    #[test]
    fn invalid_characters() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["CAT"]));

        assert_eq!(session.guess("ca t"), GuessOutcome::InvalidCharacters);
        assert_eq!(session.guess("ca't"), GuessOutcome::InvalidCharacters);
        assert_eq!(session.guess("cat\r\n"), GuessOutcome::InvalidCharacters);
        assert_eq!(session.guess(b"ca\xff"), GuessOutcome::InvalidCharacters);
    }

    #[test]
    fn only_one_terminator_is_stripped() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["CAT"]));
        assert_eq!(session.guess("cat\n\n"), GuessOutcome::InvalidCharacters);
    }

    #[test]
    fn formable_but_unknown() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["CAT"]));
        assert_eq!(session.guess("goat"), GuessOutcome::NotInDictionary);
        assert_eq!(session.guess("toad"), GuessOutcome::NotInDictionary);
    }

    #[test]
    fn multiplicity_is_enforced_on_guesses() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["TOOT"]));
        assert_eq!(session.guess("toot"), GuessOutcome::CannotBeFormed);
    }

    #[test]
    fn duplicate_candidates_score_once() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["DOG", "DOG"]));
        assert!(session.guess("dog").is_success());
        assert_eq!(session.guess("dog"), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn score_only_changes_on_new_guesses() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["CAT", "DOG", "GOAT", "CATDOG"]));
        let guesses = [
            "cat", "x", "cat", "dog!", "goat", "doggy", "GOAT", "dog", "catdog", "catdog",
        ];

        let mut previous = session.score();
        for guess in guesses {
            let outcome = session.guess(guess);
            let score = session.score();
            assert!(score >= previous);
            assert_eq!(score - previous, outcome.points(), "guess {guess}");
            previous = score;
        }
        assert_eq!(session.score(), 3 + 4 + 3 + 16);
        assert_eq!(session.candidates().guessed_count(), 4);
    }

    #[test]
    fn all_invalid_leaves_zero() {
        let pool = LetterPool::new("CATDOG").unwrap();
        let mut session = Session::new(&pool, 3, candidates(&["CAT"]));
        for guess in ["", "a", "zzzz", "goat", "c4t"] {
            assert!(!session.guess(guess).is_success());
        }
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn accessors_report_limits() {
        let pool = LetterPool::new("abcdefgh").unwrap();
        let session = Session::new(&pool, 5, candidates(&[]));
        assert_eq!(session.min_length(), 5);
        assert_eq!(session.max_length(), 8);
    }
}
