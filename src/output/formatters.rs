//! Formatting utilities for round display

use crate::core::{Letter, RoundState};

/// Revealed pattern with a space between positions, e.g. `C _ T`
#[must_use]
pub fn pattern_to_string(revealed: &[u8]) -> String {
    revealed
        .iter()
        .map(|&b| char::from(b).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in guess order, space-separated
#[must_use]
pub fn letters_to_string(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attempts counter, e.g. `5/8`
#[must_use]
pub fn attempts_counter(round: &RoundState) -> String {
    format!("{}/{}", round.attempts_remaining(), round.budget())
}
