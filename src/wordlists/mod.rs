//! Word catalog for Hangman
//!
//! Provides the embedded catalog compiled into the binary, a file loader for
//! custom lists, and the `WordBank` rounds draw from.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{BankError, WordBank, WordEntry, draw_random};
pub use embedded::{WORD_BANK, WORD_BANK_COUNT};
