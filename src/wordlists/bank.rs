//! The word catalog and random word draws

use crate::core::{Tier, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// One catalog entry: a secret word, its hint and its tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Word,
    hint: String,
    tier: Tier,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: Word, hint: impl Into<String>, tier: Tier) -> Self {
        Self {
            word,
            hint: hint.into(),
            tier,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }
}

/// Error type for an unusable catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    Empty,
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid entries"),
        }
    }
}

impl std::error::Error for BankError {}

/// Read-only word catalog
///
/// Never empty, so every tier always has at least one candidate.
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<WordEntry>,
}

impl WordBank {
    /// Build a catalog
    ///
    /// # Errors
    /// Returns `BankError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, BankError> {
        if entries.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { entries })
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    /// Returns `BankError::Empty` if no embedded entry is valid.
    pub fn embedded() -> Result<Self, BankError> {
        Self::new(super::loader::entries_from_slice(super::WORD_BANK))
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Entries for `tier`, or the whole catalog if the tier has none
    #[must_use]
    pub fn words_for_tier(&self, tier: Tier) -> Vec<&WordEntry> {
        let filtered: Vec<&WordEntry> = self.entries.iter().filter(|e| e.tier == tier).collect();
        if filtered.is_empty() {
            self.entries.iter().collect()
        } else {
            filtered
        }
    }

    /// Draw a random entry for `tier`
    ///
    /// # Panics
    /// Will not panic - the catalog is non-empty by construction, so the
    /// fallback always yields candidates.
    pub fn draw<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> &WordEntry {
        draw_random(&self.words_for_tier(tier), rng).expect("catalog is never empty")
    }
}

/// Uniformly pick one candidate
///
/// Returns `None` if `candidates` is empty.
pub fn draw_random<'a, R: Rng + ?Sized>(
    candidates: &[&'a WordEntry],
    rng: &mut R,
) -> Option<&'a WordEntry> {
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn entry(word: &str, tier: Tier) -> WordEntry {
        WordEntry::new(Word::new(word).unwrap(), "hint", tier)
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(WordBank::new(Vec::new()).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn words_for_tier_filters() {
        let bank = WordBank::embedded().unwrap();
        for tier in Tier::ALL {
            let words = bank.words_for_tier(tier);
            assert!(!words.is_empty());
            assert!(words.iter().all(|e| e.tier() == tier));
        }
        assert_eq!(bank.words_for_tier(Tier::Hard).len(), 4);
    }

    #[test]
    fn words_for_tier_falls_back_to_everything() {
        let bank = WordBank::new(vec![entry("CAT", Tier::Easy), entry("DOG", Tier::Easy)]).unwrap();
        let hard = bank.words_for_tier(Tier::Hard);
        assert_eq!(hard.len(), 2);
    }

    #[test]
    fn draw_stays_within_tier() {
        let bank = WordBank::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            assert_eq!(bank.draw(Tier::Medium, &mut rng).tier(), Tier::Medium);
        }
    }

    #[test]
    fn draw_reaches_every_candidate() {
        let bank = WordBank::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let seen: FxHashSet<&str> = (0..200)
            .map(|_| bank.draw(Tier::Easy, &mut rng).word().text())
            .collect();
        assert_eq!(seen.len(), bank.words_for_tier(Tier::Easy).len());
    }

    #[test]
    fn draw_random_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(draw_random(&[], &mut rng).is_none());
    }
}
