//! Scoring rule
//!
//! A newly guessed word is worth one point per letter. Using every letter in
//! the pool earns a fixed bonus on top.

/// Extra points for a word that uses the whole pool
pub const BONUS_POINTS: u32 = 10;

/// Points awarded for a newly guessed word of `word_len` letters
///
/// `max_len` is the pool size, the longest word that can be formed.
///
/// # Examples
/// ```
/// use unscramble::core::points_for;
///
/// assert_eq!(points_for(3, 6), 3);
/// assert_eq!(points_for(6, 6), 16);
/// ```
#[must_use]
pub fn points_for(word_len: usize, max_len: usize) -> u32 {
    let base = u32::try_from(word_len).unwrap_or(u32::MAX);
    if word_len == max_len {
        base.saturating_add(BONUS_POINTS)
    } else {
        base
    }
}
