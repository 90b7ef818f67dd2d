//! Game orchestration
//!
//! Rounds and sessions, driven through the `Renderer` and `InputSource` ports.

mod controller;
mod ports;
mod session;

#[cfg(test)]
pub(crate) mod script;

pub use controller::{Phase, RoundController};
pub use ports::{InputClosed, InputSource, Renderer, is_affirmative, is_input_closed};
pub use session::{PLAY_AGAIN_PROMPT, run_session};
