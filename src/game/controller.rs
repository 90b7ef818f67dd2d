//! Round controller
//!
//! Drives one round through `SelectingTier → Playing → Resolved`, talking to
//! the player only through the front-end ports.

use super::{InputSource, Renderer};
use crate::core::{RoundState, Tier};
use crate::wordlists::WordBank;
use anyhow::Result;
use rand::Rng;

/// Where a round currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    SelectingTier,
    Playing(RoundState),
    Resolved(RoundState),
}

/// Runs rounds against a catalog and a session-wide random generator
pub struct RoundController<'a, R: Rng + ?Sized> {
    bank: &'a WordBank,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RoundController<'a, R> {
    pub fn new(bank: &'a WordBank, rng: &'a mut R) -> Self {
        Self { bank, rng }
    }

    /// Fresh round for `tier` with a newly drawn word
    pub fn start(&mut self, tier: Tier) -> RoundState {
        let entry = self.bank.draw(tier, &mut *self.rng);
        RoundState::new(tier, entry.word().clone(), entry.hint())
    }

    /// Advance one transition
    ///
    /// `Playing` advances by exactly one accepted guess. `Resolved` is
    /// terminal and returned unchanged.
    ///
    /// # Errors
    /// Propagates front-end failures, including `InputClosed`.
    pub fn step<U: Renderer + InputSource + ?Sized>(
        &mut self,
        phase: Phase,
        ui: &mut U,
    ) -> Result<Phase> {
        match phase {
            Phase::SelectingTier => {
                let tier = ui.read_tier_choice()?;
                Ok(Phase::Playing(self.start(tier)))
            }
            Phase::Playing(round) => {
                ui.render(&round)?;
                let letter = ui.read_guess_letter(&round)?;

                let (next, verdict) = match round.guess(letter) {
                    Ok(step) => step,
                    Err(err) => {
                        ui.report_rejection(&err)?;
                        return Ok(Phase::Playing(round));
                    }
                };
                ui.report_guess(letter, verdict)?;

                if next.is_over() {
                    Ok(Phase::Resolved(next))
                } else {
                    ui.wait_for_continue()?;
                    Ok(Phase::Playing(next))
                }
            }
            resolved @ Phase::Resolved(_) => Ok(resolved),
        }
    }

    /// Play a whole round and report its result
    ///
    /// # Errors
    /// Propagates front-end failures, including `InputClosed`.
    pub fn play<U: Renderer + InputSource + ?Sized>(&mut self, ui: &mut U) -> Result<RoundState> {
        let mut phase = Phase::SelectingTier;
        loop {
            phase = match self.step(phase, ui)? {
                Phase::Resolved(round) => {
                    ui.render(&round)?;
                    ui.report_outcome(&round)?;
                    return Ok(round);
                }
                next => next,
            };
        }
    }
}
