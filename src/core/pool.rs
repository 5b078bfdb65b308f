//! Letter pool representation
//!
//! A `LetterPool` is the fixed multiset of letters the player draws from. Each
//! letter may be used at most as many times as it appears in the pool.

use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of buckets in a letter count table (A-Z)
pub const ALPHABET: usize = 26;

/// Fewest letters a pool may hold
pub const MIN_POOL_LETTERS: usize = 4;

/// Most letters a pool may hold
pub const MAX_POOL_LETTERS: usize = 12;

/// Error type for an unusable letter string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Letters must be ASCII letters only")]
    NonAlphabetic,
    #[error("At least 4 letters expected, got {0}")]
    TooFew(usize),
    #[error("No more than 12 letters expected, got {0}")]
    TooMany(usize),
}

/// Map an ASCII letter to its bucket, case-insensitively
#[inline]
fn bucket(byte: u8) -> Option<usize> {
    byte.is_ascii_alphabetic()
        .then(|| usize::from(byte.to_ascii_uppercase() - b'A'))
}

/// Build the per-letter count table for a letter string
///
/// Bytes that are not ASCII letters are ignored.
fn count_letters(letters: &[u8]) -> [u8; ALPHABET] {
    let mut counts = [0u8; ALPHABET];
    for index in letters.iter().copied().filter_map(bucket) {
        counts[index] = counts[index].saturating_add(1);
    }
    counts
}

/// Consume letters of `word` from `counts`, failing on the first one that is exhausted
fn consume(mut counts: [u8; ALPHABET], word: &[u8]) -> bool {
    for &byte in word {
        let Some(index) = bucket(byte) else {
            return false;
        };
        if counts[index] == 0 {
            return false;
        }
        counts[index] -= 1;
    }
    true
}

/// Check whether `word` can be assembled from `letters`
///
/// Matching is case-insensitive and respects multiplicity: a letter present
/// once in `letters` can only be used once. The empty word always succeeds.
/// A byte that is not an ASCII letter can never be formed.
///
/// # Examples
/// ```
/// use unscramble::core::can_form_word;
///
/// assert!(can_form_word("dog", "CATDOG"));
/// assert!(!can_form_word("good", "CATDOG"));
/// assert!(can_form_word("", "CATDOG"));
/// ```
#[must_use]
pub fn can_form_word(word: impl AsRef<[u8]>, letters: impl AsRef<[u8]>) -> bool {
    consume(count_letters(letters.as_ref()), word.as_ref())
}

/// The letters available for one session
///
/// Keeps the letters exactly as given (for display) alongside a count table
/// so repeated matching does not rebuild it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: String,
    counts: [u8; ALPHABET],
}

impl LetterPool {
    /// Create a pool from a letter string
    ///
    /// # Errors
    /// Returns `LetterError` if:
    /// - Any character is not an ASCII letter
    /// - There are fewer than `MIN_POOL_LETTERS` letters
    /// - There are more than `MAX_POOL_LETTERS` letters
    ///
    /// The checks run in that order, so `"ab1"` is `NonAlphabetic` rather than `TooFew`.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::{LetterError, LetterPool};
    ///
    /// let pool = LetterPool::new("CatDog").unwrap();
    /// assert_eq!(pool.len(), 6);
    /// assert_eq!(pool.letters(), "CatDog");
    ///
    /// assert_eq!(LetterPool::new("abc"), Err(LetterError::TooFew(3)));
    /// ```
    pub fn new(letters: impl Into<String>) -> Result<Self, LetterError> {
        let letters: String = letters.into();

        if !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(LetterError::NonAlphabetic);
        }

        let len = letters.len();
        if len < MIN_POOL_LETTERS {
            return Err(LetterError::TooFew(len));
        }
        if len > MAX_POOL_LETTERS {
            return Err(LetterError::TooMany(len));
        }

        let counts = count_letters(letters.as_bytes());
        Ok(Self { letters, counts })
    }

    /// Generate a pool of `len` random uppercase letters
    ///
    /// `len` is clamped into the valid pool size range.
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        let len = len.clamp(MIN_POOL_LETTERS, MAX_POOL_LETTERS);
        let letters: String = (0..len)
            .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
            .collect();
        let counts = count_letters(letters.as_bytes());
        Self { letters, counts }
    }

    /// The letters as originally given
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of letters in the pool, which is also the longest guessable word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the pool has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check whether `word` can be assembled from this pool
    ///
    /// Same rules as [`can_form_word`], using the precomputed count table.
    #[inline]
    #[must_use]
    pub fn can_form(&self, word: impl AsRef<[u8]>) -> bool {
        consume(self.counts, word.as_ref())
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn can_form_simple() {
        assert!(can_form_word("cat", "CATDOG"));
        assert!(can_form_word("catdog", "CATDOG"));
        assert!(can_form_word("GOAT", "catdog"));
    }

    #[test]
    fn can_form_respects_multiplicity() {
        assert!(!can_form_word("toot", "CATDOG"));
        assert!(can_form_word("toot", "TOOTED"));
        assert!(!can_form_word("tooted", "TOTED"));
    }

    #[test]
    fn can_form_rejects_missing_letter() {
        assert!(!can_form_word("xyz", "CATDOG"));
        assert!(!can_form_word("cats", "CATDOG"));
    }

    #[test]
    fn can_form_empty_word() {
        assert!(can_form_word("", "CATDOG"));
        assert!(can_form_word("", ""));
    }

    #[test]
    fn can_form_rejects_non_letters() {
        assert!(!can_form_word("ca't", "CATDOG"));
        assert!(!can_form_word(" cat", "CATDOG"));
        assert!(!can_form_word("cat\r", "CATDOG"));
        assert!(!can_form_word("c4t", "CATDOG"));
    }

    #[test]
    fn can_form_agrees_with_letter_counts() {
        // Exhaustive check over a small alphabet: formable iff no letter is overused
        let pool = "aabc";
        let alphabet = [b'a', b'b', b'c', b'd'];
        for len in 0..=5u32 {
            for n in 0..4usize.pow(len) {
                let mut rest = n;
                let word: Vec<u8> = (0..len)
                    .map(|_| {
                        let c = alphabet[rest % 4];
                        rest /= 4;
                        c
                    })
                    .collect();
                let expected = alphabet.iter().all(|&c| {
                    word.iter().filter(|&&w| w == c).count()
                        <= pool.bytes().filter(|&p| p == c).count()
                });
                assert_eq!(
                    can_form_word(&word, pool),
                    expected,
                    "word {:?}",
                    String::from_utf8_lossy(&word)
                );
            }
        }
    }

    #[test]
    fn pool_creation_valid() {
        let pool = LetterPool::new("CatDog").unwrap();
        assert_eq!(pool.letters(), "CatDog");
        assert_eq!(pool.len(), 6);
        assert!(!pool.is_empty());
        assert!(pool.can_form("GOAT"));
        assert!(!pool.can_form("zoo"));
    }

    #[test]
    fn pool_creation_invalid() {
        assert_eq!(LetterPool::new("ab1d"), Err(LetterError::NonAlphabetic));
        assert_eq!(LetterPool::new("ab d"), Err(LetterError::NonAlphabetic));
        assert_eq!(LetterPool::new("ab1"), Err(LetterError::NonAlphabetic));
        assert_eq!(LetterPool::new("abc"), Err(LetterError::TooFew(3)));
        assert_eq!(LetterPool::new(""), Err(LetterError::TooFew(0)));
        assert_eq!(
            LetterPool::new("abcdefghijklm"),
            Err(LetterError::TooMany(13))
        );
        assert!(LetterPool::new("abcd").is_ok());
        assert!(LetterPool::new("abcdefghijkl").is_ok());
    }

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::new("aAbB").unwrap();
        assert!(pool.can_form("abba"));
        assert!(!pool.can_form("aaa"));
    }

    #[test]
    fn pool_can_form_matches_free_function() {
        let pool = LetterPool::new("TOOTED").unwrap();
        for word in ["toot", "DOTE", "tooted", "toots", "", "do g"] {
            assert_eq!(pool.can_form(word), can_form_word(word, "TOOTED"), "{word}");
        }
    }

    #[test]
    fn random_pool_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = LetterPool::random(&mut rng, 9);
        assert_eq!(pool.len(), 9);
        assert!(pool.letters().bytes().all(|b| b.is_ascii_uppercase()));
        assert!(pool.can_form(pool.letters()));
    }

    #[test]
    fn random_pool_clamps_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(LetterPool::random(&mut rng, 1).len(), MIN_POOL_LETTERS);
        assert_eq!(LetterPool::random(&mut rng, 40).len(), MAX_POOL_LETTERS);
    }

    #[test]
    fn random_pool_is_deterministic_for_seed() {
        let a = LetterPool::random(&mut StdRng::seed_from_u64(42), 9);
        let b = LetterPool::random(&mut StdRng::seed_from_u64(42), 9);
        assert_eq!(a, b);
    }

    #[test]
    fn letter_error_messages() {
        assert_eq!(
            LetterError::TooFew(3).to_string(),
            "At least 4 letters expected, got 3"
        );
        assert_eq!(
            LetterError::TooMany(13).to_string(),
            "No more than 12 letters expected, got 13"
        );
    }

    #[test]
    fn pool_display() {
        let pool = LetterPool::new("CatDog").unwrap();
        assert_eq!(format!("{pool}"), "CatDog");
    }
}
