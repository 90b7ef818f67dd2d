//! TUI rendering with ratatui
//!
//! Gallows, round details and a message log for the Hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Outcome, RoundState, Tier};
use crate::output::formatters::{attempts_counter, letters_to_string, pattern_to_string};
use crate::output::frames::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Input prompt
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.round {
        Some(round) => render_round(f, round, chunks[1]),
        None => render_tier_menu(f, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tier_menu(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("Select difficulty level:"), Line::from("")];
    for tier in Tier::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. {:<7}", tier.choice(), tier.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("({}, {} attempts)", tier.word_lengths(), tier.budget())),
        ]));
    }

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" New Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_round(f: &mut Frame, round: &RoundState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(17), // Gallows
            Constraint::Min(30),    // Round details
        ])
        .split(area);

    let gallows_color = match round.outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::White,
    };
    let art = Paragraph::new(gallows(round.misses()))
        .style(Style::default().fg(gallows_color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(art, chunks[0]);

    render_details(f, round, chunks[1]);
}

fn render_details(f: &mut Frame, round: &RoundState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Details
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    let guessed = if round.guessed().is_empty() {
        "-".to_string()
    } else {
        letters_to_string(round.guessed())
    };

    let content = vec![
        Line::from(format!("Difficulty: {}", round.tier().label())),
        Line::from(format!("Attempts remaining: {}", attempts_counter(round))),
        Line::from(format!("Hint: {}", round.hint())),
        Line::from(""),
        Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                pattern_to_string(round.revealed()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Guessed letters: {guessed}")),
    ];

    let details = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(details, chunks[0]);

    let ratio = f64::from(round.attempts_remaining()) / f64::from(round.budget());
    let gauge_color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(ratio)
        .label(format!("{} left", round.attempts_remaining()));
    f.render_widget(gauge, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::TierSelect => (
            " Press 1, 2 or 3 to pick a difficulty | Esc to quit ",
            Color::Cyan,
        ),
        InputMode::Guess => (" Type a letter to guess | Esc to quit ", Color::Yellow),
        InputMode::Continue => (" Press Enter to continue ", Color::White),
        InputMode::PlayAgain => (" Play again? (y/n) ", Color::Green),
        InputMode::Idle => (" Goodbye ", Color::DarkGray),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}
