//! Hangman - CLI
//!
//! Console word-guessing game with a line-based mode and a full-screen TUI mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_play,
    interactive::run_tui,
    wordlists::{WordBank, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file with one WORD|hint|tier entry per line (default: built-in catalog)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for the word draw, for reproducible sessions (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based console game (default)
    Play,

    /// Full-screen terminal interface
    Tui,
}

/// Load the catalog based on the -w flag
fn load_bank(path: Option<&Path>) -> Result<WordBank> {
    let Some(path) = path else {
        return Ok(WordBank::embedded()?);
    };

    let entries = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    WordBank::new(entries).with_context(|| format!("Unusable word list {}", path.display()))
}

/// One generator for the whole process, never reseeded between rounds
fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_bank(cli.words.as_deref())?;
    let mut rng = make_rng(cli.seed);

    // Default to console mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&bank, &mut rng),
        Commands::Tui => run_tui(&bank, &mut rng),
    }
}
