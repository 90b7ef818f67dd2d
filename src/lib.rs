//! Hangman
//!
//! A console word-guessing game with difficulty tiers, hints and a gallows
//! that grows with every miss.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Letter, Outcome, RoundState, Tier, Word};
//!
//! // Start a round
//! let round = RoundState::new(Tier::Easy, Word::new("cat").unwrap(), "A common pet animal");
//!
//! // Every guess produces the next round state
//! let (round, verdict) = round.guess(Letter::new('c').unwrap()).unwrap();
//! assert!(verdict.is_correct());
//! assert_eq!(round.revealed(), b"C__");
//! assert_eq!(round.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Word catalog
pub mod wordlists;

// Round controller, session loop and front-end ports
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
