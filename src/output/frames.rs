//! Gallows ASCII art
//!
//! Seven frames, from the empty gallows to the complete figure.

/// Gallows frames in drawing order
pub const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Index of the last frame
pub const LAST_FRAME: usize = GALLOWS.len() - 1;

/// Frame index for a miss count
///
/// Easy allows more misses than there are frames, so the index saturates at
/// the last frame.
#[inline]
#[must_use]
pub fn frame_index(misses: u8) -> usize {
    usize::from(misses).min(LAST_FRAME)
}

/// Frame for a miss count
#[must_use]
pub fn gallows(misses: u8) -> &'static str {
    GALLOWS[frame_index(misses)]
}
