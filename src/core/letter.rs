//! A single guessed letter

use super::{FormatIssue, InputError};
use std::fmt;

/// An uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `InputError::InvalidGuessFormat` if the character is not an ASCII letter.
    pub fn new(c: char) -> Result<Self, InputError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(InputError::InvalidGuessFormat(FormatIssue::NotALetter))
        }
    }

    /// Parse one line of player input as a letter
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly one
    /// alphabetic character.
    ///
    /// # Errors
    /// Returns `InputError::InvalidGuessFormat` describing what was wrong.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" k\n").unwrap().as_char(), 'K');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(InputError::InvalidGuessFormat(
                FormatIssue::NotSingleCharacter,
            )),
        }
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
