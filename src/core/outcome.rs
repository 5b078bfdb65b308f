//! Classification of a single guess

/// What happened to one line of player input
///
/// Rejections carry the limit they were checked against so the presentation
/// layer can report it. Only `NewlyGuessed` changes the session score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Shorter than the configured minimum length
    TooShort { min_length: usize },
    /// Longer than the letter pool
    TooLong { max_length: usize },
    /// Contains something other than ASCII letters
    InvalidCharacters,
    /// Uses a letter more often than the pool provides
    CannotBeFormed,
    /// Matches a candidate that was already scored
    AlreadyGuessed,
    /// Formable, but not a candidate word
    NotInDictionary,
    /// First correct guess of a candidate
    NewlyGuessed { points: u32, score: u32 },
}

impl GuessOutcome {
    /// Whether this outcome scored points
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::NewlyGuessed { .. })
    }

    /// Points awarded by this outcome (zero for every rejection)
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::NewlyGuessed { points, .. } => points,
            _ => 0,
        }
    }
}
