//! Core domain types for Hangman
//!
//! This module contains the game rules with no I/O. Everything here is pure
//! and testable: a round is a value, and a guess is a transition to the next value.

mod error;
mod letter;
mod round;
mod tier;
mod word;

pub use error::{FormatIssue, InputError};
pub use letter::Letter;
pub use round::{Outcome, PLACEHOLDER, RoundState, Verdict};
pub use tier::Tier;
pub use word::{Word, WordError};
