//! Scripted front end for headless tests

use super::{InputClosed, InputSource, Renderer, is_affirmative};
use crate::core::{InputError, Letter, Outcome, RoundState, Tier, Verdict};
use anyhow::Result;
use std::collections::VecDeque;

/// Everything the game asked the front end to do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Greeted,
    Rendered { attempts: u8, revealed: String },
    Rejected(InputError),
    Guessed(Letter, Verdict),
    Paused,
    Resolved { outcome: Outcome, word: String },
    Asked,
    Farewell,
}

/// Feeds canned lines to the game and records what it displays
pub struct ScriptedUi {
    lines: VecDeque<String>,
    check_duplicates: bool,
    pub events: Vec<Event>,
}

impl ScriptedUi {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|&l| l.to_string()).collect(),
            check_duplicates: true,
            events: Vec::new(),
        }
    }

    /// Only checks guess format, leaving duplicates for the round to refuse
    pub fn unchecked(lines: &[&str]) -> Self {
        Self {
            check_duplicates: false,
            ..Self::new(lines)
        }
    }

    fn next_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or_else(|| InputClosed.into())
    }

    pub fn count(&self, wanted: fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| wanted(e)).count()
    }
}

impl Renderer for ScriptedUi {
    fn greet(&mut self) -> Result<()> {
        self.events.push(Event::Greeted);
        Ok(())
    }

    fn render(&mut self, round: &RoundState) -> Result<()> {
        self.events.push(Event::Rendered {
            attempts: round.attempts_remaining(),
            revealed: String::from_utf8_lossy(round.revealed()).into_owned(),
        });
        Ok(())
    }

    fn report_guess(&mut self, letter: Letter, verdict: Verdict) -> Result<()> {
        self.events.push(Event::Guessed(letter, verdict));
        Ok(())
    }

    fn report_rejection(&mut self, error: &InputError) -> Result<()> {
        self.events.push(Event::Rejected(error.clone()));
        Ok(())
    }

    fn report_outcome(&mut self, round: &RoundState) -> Result<()> {
        self.events.push(Event::Resolved {
            outcome: round.outcome(),
            word: round.secret().text().to_string(),
        });
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        self.events.push(Event::Farewell);
        Ok(())
    }
}

impl InputSource for ScriptedUi {
    fn read_tier_choice(&mut self) -> Result<Tier> {
        loop {
            match Tier::from_choice(&self.next_line()?) {
                Ok(tier) => return Ok(tier),
                Err(err) => self.report_rejection(&err)?,
            }
        }
    }

    fn read_guess_letter(&mut self, round: &RoundState) -> Result<Letter> {
        loop {
            let line = self.next_line()?;
            let checked = if self.check_duplicates {
                round.validate_guess(&line)
            } else {
                Letter::parse(&line)
            };
            match checked {
                Ok(letter) => return Ok(letter),
                Err(err) => self.report_rejection(&err)?,
            }
        }
    }

    fn wait_for_continue(&mut self) -> Result<()> {
        self.events.push(Event::Paused);
        Ok(())
    }

    fn read_yes_no(&mut self, _prompt: &str) -> Result<bool> {
        self.events.push(Event::Asked);
        Ok(is_affirmative(&self.next_line()?))
    }
}
