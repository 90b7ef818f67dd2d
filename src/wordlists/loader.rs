//! Word catalog loading utilities
//!
//! Provides functions to load catalogs from files or use the embedded constant.

use super::WordEntry;
use crate::core::{Tier, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load catalog entries from a file
///
/// Each line is `WORD|hint|tier`. Blank lines and lines starting with `#` are
/// ignored, and malformed entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(parse_line).collect())
}

/// Parse one `WORD|hint|tier` line
///
/// Returns `None` for blank lines, comments and malformed entries.
#[must_use]
pub fn parse_line(line: &str) -> Option<WordEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut fields = trimmed.split('|').map(str::trim);
    let (word, hint, tier) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }

    Some(WordEntry::new(Word::new(word).ok()?, hint, Tier::from_name(tier)?))
}

/// Convert the embedded catalog to entries
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::entries_from_slice;
/// use hangman::wordlists::WORD_BANK;
///
/// let entries = entries_from_slice(WORD_BANK);
/// assert_eq!(entries.len(), WORD_BANK.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str, Tier)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, hint, tier)| Some(WordEntry::new(Word::new(word).ok()?, hint, tier)))
        .collect()
}
