//! Session loop
//!
//! Plays rounds until the player declines another one. Nothing carries over
//! between rounds except the random generator.

use super::{InputSource, Renderer, RoundController, is_input_closed};
use crate::wordlists::WordBank;
use anyhow::Result;
use rand::Rng;

/// Prompt shown after every round
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (y/n)";

/// Run a session and return the number of rounds completed
///
/// Closing the input ends the session like answering no.
///
/// # Errors
/// Propagates front-end failures other than `InputClosed`.
pub fn run_session<R, U>(bank: &WordBank, rng: &mut R, ui: &mut U) -> Result<usize>
where
    R: Rng + ?Sized,
    U: Renderer + InputSource + ?Sized,
{
    ui.greet()?;

    let mut rounds = 0;
    let result = loop {
        if let Err(err) = RoundController::new(bank, rng).play(ui) {
            break Err(err);
        }
        rounds += 1;

        match ui.read_yes_no(PLAY_AGAIN_PROMPT) {
            Ok(true) => {}
            Ok(false) => break Ok(()),
            Err(err) => break Err(err),
        }
    };

    match result {
        Err(err) if !is_input_closed(&err) => Err(err),
        _ => {
            ui.farewell()?;
            Ok(rounds)
        }
    }
}
