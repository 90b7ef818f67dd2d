//! Front-end capabilities the game is driven through
//!
//! The controller never touches a terminal directly. A front end implements
//! both traits; the line console, the TUI and the test script all do.

use crate::core::{InputError, Letter, RoundState, Tier, Verdict};
use anyhow::Result;
use std::fmt;

/// Display sink
pub trait Renderer {
    /// Show the session welcome
    ///
    /// # Errors
    /// Returns an error if the display cannot be written.
    fn greet(&mut self) -> Result<()>;

    /// Full redraw of the round, clearing prior content first
    ///
    /// # Errors
    /// Returns an error if the display cannot be written.
    fn render(&mut self, round: &RoundState) -> Result<()>;

    /// Tell the player whether the last guess hit
    ///
    /// # Errors
    /// Returns an error if the display cannot be written.
    fn report_guess(&mut self, letter: Letter, verdict: Verdict) -> Result<()>;

    /// Tell the player why their input was refused; the round is unchanged
    ///
    /// # Errors
    /// Returns an error if the display cannot be written.
    fn report_rejection(&mut self, error: &InputError) -> Result<()>;

    /// Announce the result and the secret word of a resolved round
    ///
    /// # Errors
    /// Returns an error if the display cannot be written.
    fn report_outcome(&mut self, round: &RoundState) -> Result<()>;

    /// Show the session goodbye
    ///
    /// # Errors
    /// Returns an error if the display cannot be written.
    fn farewell(&mut self) -> Result<()>;
}

/// Input source
///
/// Every read blocks until the player answers. Invalid answers are rejected
/// and re-prompted inside the implementation, so callers only ever see valid
/// values or an I/O failure.
pub trait InputSource {
    /// # Errors
    /// Returns `InputClosed` when the player leaves, or an I/O error.
    fn read_tier_choice(&mut self) -> Result<Tier>;

    /// Read a letter not yet guessed in `round`
    ///
    /// # Errors
    /// Returns `InputClosed` when the player leaves, or an I/O error.
    fn read_guess_letter(&mut self, round: &RoundState) -> Result<Letter>;

    /// Block until the player signals to continue
    ///
    /// # Errors
    /// Returns `InputClosed` when the player leaves, or an I/O error.
    fn wait_for_continue(&mut self) -> Result<()>;

    /// # Errors
    /// Returns `InputClosed` when the player leaves, or an I/O error.
    fn read_yes_no(&mut self, prompt: &str) -> Result<bool>;
}

/// The player closed the input (end of stream, Esc, Ctrl-C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Check whether an error chain ends in `InputClosed`
#[must_use]
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InputClosed>().is_some()
}

/// Whether a yes/no answer is affirmative
///
/// Only the first non-blank character counts, case-insensitively; anything
/// but `y` means no.
///
/// # Examples
/// ```
/// use hangman::game::is_affirmative;
///
/// assert!(is_affirmative(" Yes\n"));
/// assert!(!is_affirmative("no"));
/// assert!(!is_affirmative(""));
/// ```
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}
