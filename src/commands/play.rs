//! Console play command
//!
//! Line-based game on stdin/stdout.

use crate::game::run_session;
use crate::output::Console;
use crate::wordlists::WordBank;
use anyhow::Result;
use rand::Rng;

/// Run the console game until the player stops
///
/// # Errors
///
/// Returns an error if writing to stdout or reading stdin fails.
pub fn run_play<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Result<()> {
    let mut console = Console::stdio();
    run_session(bank, rng, &mut console)?;
    Ok(())
}
