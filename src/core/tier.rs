//! Difficulty tiers and their attempt budgets

use super::InputError;
use std::fmt;

/// Difficulty tier, selecting the word pool and the attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// All tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Maximum number of incorrect guesses before the round is lost
    #[inline]
    #[must_use]
    pub const fn budget(self) -> u8 {
        match self {
            Self::Easy => 8,
            Self::Medium => 6,
            Self::Hard => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Word length range shown in the tier menu
    #[must_use]
    pub const fn word_lengths(self) -> &'static str {
        match self {
            Self::Easy => "3-4 letters",
            Self::Medium => "6-7 letters",
            Self::Hard => "8+ letters",
        }
    }

    /// Menu number of this tier (1-3)
    #[must_use]
    pub const fn choice(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Parse a menu choice ("1", "2" or "3")
    ///
    /// # Errors
    /// Returns `InputError::InvalidTierSelection` for anything else, including
    /// non-numeric input.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Tier;
    ///
    /// assert_eq!(Tier::from_choice(" 3 ").unwrap(), Tier::Hard);
    /// assert!(Tier::from_choice("4").is_err());
    /// ```
    pub fn from_choice(input: &str) -> Result<Self, InputError> {
        match input.trim().parse::<u8>() {
            Ok(1) => Ok(Self::Easy),
            Ok(2) => Ok(Self::Medium),
            Ok(3) => Ok(Self::Hard),
            _ => Err(InputError::InvalidTierSelection),
        }
    }

    /// Look up a tier by label, ignoring case
    ///
    /// Used when loading word lists from files.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
