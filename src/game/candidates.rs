//! Candidate words and their guessed flags

use rustc_hash::FxHashMap;

/// Result of looking a normalised guess up in the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The first matching candidate was unguessed and is now marked
    Claimed,
    /// The first matching candidate had already been guessed
    AlreadyClaimed,
    /// No candidate matches
    Missing,
}

/// Ordered candidate words, each paired with a guessed flag
///
/// An index from word to its positions avoids scanning the whole list per
/// guess. Lookups always go to the earliest position, which is exactly what a
/// front-to-back scan would find first.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    words: Vec<String>,
    guessed: Vec<bool>,
    positions: FxHashMap<String, Vec<usize>>,
}

impl CandidateSet {
    /// Build a set from already-normalised candidate words, all unguessed
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let mut positions: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            positions.entry(word.clone()).or_default().push(i);
        }

        Self {
            guessed: vec![false; words.len()],
            words,
            positions,
        }
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the entry at `index` has been guessed
    ///
    /// Returns false for an out-of-range index.
    #[must_use]
    pub fn is_guessed(&self, index: usize) -> bool {
        self.guessed.get(index).copied().unwrap_or(false)
    }

    /// Number of entries guessed so far
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.guessed.iter().filter(|&&g| g).count()
    }

    /// Try to claim `word`, marking its first occurrence as guessed
    ///
    /// Only the earliest entry equal to `word` is considered. If it was
    /// already guessed the claim fails even when a later duplicate is still
    /// open. Flags only ever go from false to true.
    pub fn claim(&mut self, word: &str) -> Claim {
        let Some(&index) = self.positions.get(word).and_then(|p| p.first()) else {
            return Claim::Missing;
        };

        if self.guessed[index] {
            Claim::AlreadyClaimed
        } else {
            self.guessed[index] = true;
            Claim::Claimed
        }
    }
}
