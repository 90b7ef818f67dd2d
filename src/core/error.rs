//! Recoverable input errors
//!
//! Every variant is answered by re-prompting the player. None of them cost an
//! attempt or end the session.

use super::Letter;
use std::fmt;

/// Why a guess was not a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Zero or more than one character was entered
    NotSingleCharacter,
    /// A single character was entered but it is not an ASCII letter
    NotALetter,
}

/// Rejected player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidTierSelection,
    InvalidGuessFormat(FormatIssue),
    DuplicateGuess(Letter),
    /// A guess was submitted after the round was resolved
    RoundOver,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTierSelection => write!(f, "Invalid input! Please enter 1, 2, or 3"),
            Self::InvalidGuessFormat(FormatIssue::NotSingleCharacter) => {
                write!(f, "Please enter exactly one letter!")
            }
            Self::InvalidGuessFormat(FormatIssue::NotALetter) => {
                write!(f, "Please enter a valid letter!")
            }
            Self::DuplicateGuess(letter) => {
                write!(f, "You already guessed '{letter}'!")
            }
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for InputError {}
