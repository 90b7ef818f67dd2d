//! Line-based console front end
//!
//! Reads whole lines from any `BufRead` and writes to any `Write`, so the
//! same code serves stdin/stdout and in-memory buffers in tests.

use super::formatters::{attempts_counter, letters_to_string, pattern_to_string};
use super::frames::gallows;
use crate::core::{InputError, Letter, Outcome, RoundState, Tier, Verdict};
use crate::game::{InputClosed, InputSource, Renderer, is_affirmative};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console front end over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Keep prior output on redraw instead of clearing the screen
    #[must_use]
    pub fn without_clearing(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one line
    ///
    /// Bytes that are not UTF-8 become replacement characters, which never
    /// parse as a tier or a letter, so such a line is re-prompted.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: BufRead, W: Write> Renderer for Console<R, W> {
    fn greet(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Welcome to Hangman!".bright_cyan().bold())?;
        Ok(())
    }

    fn render(&mut self, round: &RoundState) -> Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let out = &mut self.output;
        writeln!(out, "{}", "=== HANGMAN GAME ===".bright_cyan().bold())?;
        writeln!(out, "Difficulty: {}", round.tier().label().bright_white())?;
        writeln!(
            out,
            "Attempts remaining: {}",
            attempts_counter(round).bright_yellow()
        )?;
        writeln!(out, "Hint: {}\n", round.hint().italic())?;
        writeln!(out, "{}\n", gallows(round.misses()))?;
        writeln!(
            out,
            "Word: {}\n",
            pattern_to_string(round.revealed()).bright_white().bold()
        )?;

        if !round.guessed().is_empty() {
            writeln!(out, "Guessed letters: {}", letters_to_string(round.guessed()))?;
        }
        out.flush()?;
        Ok(())
    }

    fn report_guess(&mut self, letter: Letter, verdict: Verdict) -> Result<()> {
        let message = if verdict.is_correct() {
            format!("Good guess! '{letter}' is in the word.").green()
        } else {
            format!("Wrong guess! '{letter}' is not in the word.").red()
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn report_rejection(&mut self, error: &InputError) -> Result<()> {
        writeln!(self.output, "{}", error.to_string().red())?;
        Ok(())
    }

    fn report_outcome(&mut self, round: &RoundState) -> Result<()> {
        let banner = match round.outcome() {
            Outcome::Won => "🎉 Congratulations! You won! 🎉".green().bold(),
            Outcome::Lost => "💀 Game Over! You lost! 💀".red().bold(),
            Outcome::InProgress => "Round abandoned".yellow(),
        };
        writeln!(self.output, "\n{banner}")?;
        writeln!(
            self.output,
            "The word was: {}",
            round.secret().text().bright_yellow().bold()
        )?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "Thanks for playing Hangman!".bright_cyan())?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> InputSource for Console<R, W> {
    fn read_tier_choice(&mut self) -> Result<Tier> {
        writeln!(self.output, "\nSelect difficulty level:")?;
        for tier in Tier::ALL {
            writeln!(
                self.output,
                "{}. {} ({}, {} attempts)",
                tier.choice(),
                tier.label(),
                tier.word_lengths(),
                tier.budget()
            )?;
        }

        loop {
            let line = self.prompt("Enter your choice (1-3): ")?;
            match Tier::from_choice(&line) {
                Ok(tier) => return Ok(tier),
                Err(err) => self.report_rejection(&err)?,
            }
        }
    }

    fn read_guess_letter(&mut self, round: &RoundState) -> Result<Letter> {
        loop {
            let line = self.prompt("Enter your guess (a single letter): ")?;
            match round.validate_guess(&line) {
                Ok(letter) => return Ok(letter),
                Err(err) => self.report_rejection(&err)?,
            }
        }
    }

    fn wait_for_continue(&mut self) -> Result<()> {
        self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let line = self.prompt(&format!("\n{prompt}: "))?;
        Ok(is_affirmative(&line))
    }
}
