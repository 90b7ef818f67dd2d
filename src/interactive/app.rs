//! TUI application state and front-end ports

use crate::core::{InputError, Letter, Outcome, RoundState, Tier, Verdict};
use crate::game::{InputClosed, InputSource, Renderer, is_affirmative, run_session};
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;

/// Source of key presses
pub trait KeySource {
    /// Block until the next key press
    ///
    /// # Errors
    /// Returns `InputClosed` on Ctrl-C, or an I/O error.
    fn next_key(&mut self) -> Result<KeyCode>;
}

/// Key presses from the real terminal
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<KeyCode> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Err(InputClosed.into());
                }
                return Ok(key.code);
            }
        }
    }
}

/// What the player is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    TierSelect,
    Guess,
    Continue,
    PlayAgain,
    Idle,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Everything the screen shows
#[derive(Debug, Clone)]
pub struct App {
    pub round: Option<RoundState>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            round: None,
            messages: Vec::new(),
            input_mode: InputMode::Idle,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Full-screen front end over any ratatui backend
pub struct Tui<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
    pub app: App,
}

impl<B: Backend, K: KeySource> Tui<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self {
            terminal,
            keys,
            app: App::new(),
        }
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn draw(&mut self) -> Result<()> {
        self.terminal.draw(|f| super::rendering::ui(f, &self.app))?;
        Ok(())
    }

    fn ask(&mut self, mode: InputMode) -> Result<KeyCode> {
        self.app.input_mode = mode;
        self.draw()?;
        let key = self.keys.next_key()?;
        if key == KeyCode::Esc {
            return Err(InputClosed.into());
        }
        Ok(key)
    }
}

impl<B: Backend, K: KeySource> Renderer for Tui<B, K> {
    fn greet(&mut self) -> Result<()> {
        self.app.add_message("Welcome to Hangman! Esc quits at any time.", MessageStyle::Info);
        self.draw()
    }

    fn render(&mut self, round: &RoundState) -> Result<()> {
        self.app.round = Some(round.clone());
        self.draw()
    }

    fn report_guess(&mut self, letter: Letter, verdict: Verdict) -> Result<()> {
        if verdict.is_correct() {
            self.app.add_message(
                &format!("Good guess! '{letter}' is in the word."),
                MessageStyle::Success,
            );
        } else {
            self.app.add_message(
                &format!("Wrong guess! '{letter}' is not in the word."),
                MessageStyle::Error,
            );
        }
        self.draw()
    }

    fn report_rejection(&mut self, error: &InputError) -> Result<()> {
        self.app.add_message(&error.to_string(), MessageStyle::Error);
        self.draw()
    }

    fn report_outcome(&mut self, round: &RoundState) -> Result<()> {
        let (text, style) = match round.outcome() {
            Outcome::Won => ("Congratulations! You won!", MessageStyle::Success),
            Outcome::Lost => ("Game Over! You lost!", MessageStyle::Error),
            Outcome::InProgress => ("Round abandoned", MessageStyle::Info),
        };
        self.app.add_message(&format!("{text} The word was: {}", round.secret()), style);
        self.app.round = Some(round.clone());
        self.draw()
    }

    fn farewell(&mut self) -> Result<()> {
        self.app.input_mode = InputMode::Idle;
        self.app.add_message("Thanks for playing Hangman!", MessageStyle::Info);
        self.draw()
    }
}

impl<B: Backend, K: KeySource> InputSource for Tui<B, K> {
    fn read_tier_choice(&mut self) -> Result<Tier> {
        self.app.round = None;
        loop {
            if let KeyCode::Char(c) = self.ask(InputMode::TierSelect)? {
                match Tier::from_choice(c.encode_utf8(&mut [0; 4])) {
                    Ok(tier) => return Ok(tier),
                    Err(err) => self.report_rejection(&err)?,
                }
            }
        }
    }

    fn read_guess_letter(&mut self, round: &RoundState) -> Result<Letter> {
        loop {
            if let KeyCode::Char(c) = self.ask(InputMode::Guess)? {
                match round.validate_guess(c.encode_utf8(&mut [0; 4])) {
                    Ok(letter) => return Ok(letter),
                    Err(err) => self.report_rejection(&err)?,
                }
            }
        }
    }

    fn wait_for_continue(&mut self) -> Result<()> {
        loop {
            if matches!(
                self.ask(InputMode::Continue)?,
                KeyCode::Enter | KeyCode::Char(' ')
            ) {
                return Ok(());
            }
        }
    }

    fn read_yes_no(&mut self, _prompt: &str) -> Result<bool> {
        match self.ask(InputMode::PlayAgain)? {
            KeyCode::Char(c) => Ok(is_affirmative(c.encode_utf8(&mut [0; 4]))),
            _ => Ok(false),
        }
    }
}

/// Run a session in the full-screen TUI
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails.
pub fn run_tui<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut tui = Tui::new(Terminal::new(backend)?, CrosstermKeys);

    // Run session
    let res = run_session(bank, rng, &mut tui);

    // Restore terminal
    disable_raw_mode()?;
    execute!(tui.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    tui.terminal_mut().show_cursor()?;

    if let Some(report) = exit_report(&res) {
        eprintln!("{report}");
    }

    Ok(())
}

/// What to print once the terminal is restored
///
/// The goodbye is already shown inside the TUI, so only failures are reported.
fn exit_report(res: &Result<usize>) -> Option<String> {
    res.as_ref().err().map(|err| format!("Error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    struct ScriptedKeys(VecDeque<KeyCode>);

    impl ScriptedKeys {
        fn new(keys: &str) -> Self {
            Self(
                keys.chars()
                    .map(|c| match c {
                        '\n' => KeyCode::Enter,
                        '~' => KeyCode::Esc,
                        c => KeyCode::Char(c),
                    })
                    .collect(),
            )
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> Result<KeyCode> {
            self.0.pop_front().ok_or_else(|| InputClosed.into())
        }
    }

    fn tui(keys: &str) -> Tui<TestBackend, ScriptedKeys> {
        Tui::new(
            Terminal::new(TestBackend::new(80, 32)).unwrap(),
            ScriptedKeys::new(keys),
        )
    }

    fn screen(tui: &Tui<TestBackend, ScriptedKeys>) -> String {
        tui.terminal()
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn bank(word: &str, tier: Tier) -> WordBank {
        WordBank::new(vec![WordEntry::new(Word::new(word).unwrap(), "Flies to space", tier)])
            .unwrap()
    }

    #[test]
    fn add_message_keeps_last_five() {
        let mut app = App::new();
        for i in 0..7 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 2");
    }

    #[test]
    fn tier_keys_reprompt_until_valid() {
        let mut ui = tui("x4\n2");
        assert_eq!(ui.read_tier_choice().unwrap(), Tier::Medium);
        let errors = ui
            .app
            .messages
            .iter()
            .filter(|m| m.style == MessageStyle::Error)
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn escape_closes_input() {
        let mut ui = tui("~");
        let err = ui.read_tier_choice().unwrap_err();
        assert!(crate::game::is_input_closed(&err));
    }

    #[test]
    fn round_screen_shows_state() {
        let round = RoundState::new(Tier::Medium, Word::new("ROCKET").unwrap(), "Flies to space");
        let (round, _) = round.guess(Letter::new('O').unwrap()).unwrap();
        let (round, _) = round.guess(Letter::new('Z').unwrap()).unwrap();

        let mut ui = tui("");
        ui.render(&round).unwrap();

        let text = screen(&ui);
        assert!(text.contains("Medium"));
        assert!(text.contains("Flies to space"));
        assert!(text.contains("_ O _ _ _ _"));
        assert!(text.contains("O Z"));
        assert!(text.contains("5/6"));
    }

    #[test]
    fn tier_menu_shown_before_round() {
        let mut ui = tui("1");
        ui.read_tier_choice().unwrap();
        let text = screen(&ui);
        assert!(text.contains("Easy"));
        assert!(text.contains("8 attempts"));
    }

    #[test]
    fn full_session_in_tui() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut ui = tui("2r\no\nz\nc\nk\ne\nt\nn");

        let rounds = run_session(&bank("ROCKET", Tier::Medium), &mut rng, &mut ui).unwrap();
        assert_eq!(rounds, 1);

        let round = ui.app.round.clone().unwrap();
        assert_eq!(round.outcome(), Outcome::Won);
        assert_eq!(round.attempts_remaining(), 5);
        assert!(screen(&ui).contains("Thanks for playing Hangman!"));
        assert_eq!(exit_report(&Ok(rounds)), None);
    }

    #[test]
    fn exit_report_only_on_failure() {
        let err: Result<usize> = Err(anyhow::anyhow!("terminal gone"));
        assert_eq!(exit_report(&err).as_deref(), Some("Error: terminal gone"));
    }
}
