//! Round state and guess transitions
//!
//! A `RoundState` is an immutable snapshot of one round. Applying a guess
//! yields a new snapshot, so a round can be rebuilt at any point by replaying
//! its guessed letters.

use super::{InputError, Letter, Tier, Word};

/// Symbol shown for a letter that has not been revealed yet
pub const PLACEHOLDER: u8 = b'_';

/// Round outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Result of a single accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The letter occurs in the word; `revealed` positions were uncovered
    Correct { revealed: usize },
    /// The letter is absent and cost one attempt
    Incorrect,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// Snapshot of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    tier: Tier,
    secret: Word,
    hint: String,
    revealed: Vec<u8>,
    guessed: Vec<Letter>,
    attempts_remaining: u8,
    outcome: Outcome,
}

impl RoundState {
    /// Start a round: every position hidden, no guesses, full budget
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Outcome, RoundState, Tier, Word};
    ///
    /// let round = RoundState::new(Tier::Medium, Word::new("ROCKET").unwrap(), "Flies to space");
    /// assert_eq!(round.attempts_remaining(), 6);
    /// assert_eq!(round.revealed(), b"______");
    /// assert_eq!(round.outcome(), Outcome::InProgress);
    /// ```
    #[must_use]
    pub fn new(tier: Tier, secret: Word, hint: impl Into<String>) -> Self {
        Self {
            tier,
            revealed: vec![PLACEHOLDER; secret.len()],
            secret,
            hint: hint.into(),
            guessed: Vec::new(),
            attempts_remaining: tier.budget(),
            outcome: Outcome::InProgress,
        }
    }

    /// Rebuild a round by applying `letters` in order to a fresh round
    ///
    /// # Errors
    /// Returns the first `InputError` a letter triggers (a duplicate, or a
    /// guess after the round was resolved).
    pub fn replay(
        tier: Tier,
        secret: Word,
        hint: impl Into<String>,
        letters: &[Letter],
    ) -> Result<Self, InputError> {
        letters
            .iter()
            .try_fold(Self::new(tier, secret, hint), |round, &letter| {
                round.guess(letter).map(|(next, _)| next)
            })
    }

    /// Parse raw input and check it against the letters already guessed
    ///
    /// # Errors
    /// Returns `InvalidGuessFormat` for anything but one letter, and
    /// `DuplicateGuess` if the letter was already tried this round.
    pub fn validate_guess(&self, input: &str) -> Result<Letter, InputError> {
        let letter = Letter::parse(input)?;
        if self.has_guessed(letter) {
            return Err(InputError::DuplicateGuess(letter));
        }
        Ok(letter)
    }

    /// Apply a guess, producing the next snapshot and the verdict
    ///
    /// A hit reveals every matching position and costs nothing; a miss costs
    /// exactly one attempt. Completion is checked before exhaustion, so a
    /// revealing guess wins even when no attempts would remain.
    ///
    /// # Errors
    /// Returns `DuplicateGuess` (leaving the round untouched) if the letter was
    /// already guessed, or `RoundOver` if the round is resolved.
    pub fn guess(&self, letter: Letter) -> Result<(Self, Verdict), InputError> {
        if self.is_over() {
            return Err(InputError::RoundOver);
        }
        if self.has_guessed(letter) {
            return Err(InputError::DuplicateGuess(letter));
        }

        let mut next = self.clone();
        next.guessed.push(letter);

        let positions = self.secret.positions_of(letter);
        let verdict = if positions.is_empty() {
            next.attempts_remaining = next.attempts_remaining.saturating_sub(1);
            Verdict::Incorrect
        } else {
            for &i in positions {
                next.revealed[i] = letter.byte();
            }
            Verdict::Correct {
                revealed: positions.len(),
            }
        };

        if next.is_fully_revealed() {
            next.outcome = Outcome::Won;
        } else if next.attempts_remaining == 0 {
            next.outcome = Outcome::Lost;
        }

        Ok((next, verdict))
    }

    #[inline]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Per-position view: the letter once guessed, otherwise `PLACEHOLDER`
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[u8] {
        &self.revealed
    }

    /// Letters guessed so far, in guess order
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn budget(&self) -> u8 {
        self.tier.budget()
    }

    /// Incorrect guesses made so far
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> u8 {
        self.tier.budget() - self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == self.secret.chars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormatIssue;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().map(|c| Letter::new(c).unwrap()).collect()
    }

    fn round(tier: Tier, word: &str) -> RoundState {
        RoundState::new(tier, Word::new(word).unwrap(), "hint")
    }

    #[test]
    fn new_round_starts_at_budget() {
        for tier in Tier::ALL {
            let state = round(tier, "JUNGLE");
            assert_eq!(state.attempts_remaining(), tier.budget());
            assert_eq!(state.misses(), 0);
            assert!(state.guessed().is_empty());
            assert!(state.revealed().iter().all(|&c| c == PLACEHOLDER));
        }
    }

    #[test]
    fn easy_cat_is_won_without_misses() {
        let mut state = round(Tier::Easy, "CAT");
        let expected = [&b"C__"[..], b"CA_", b"CAT"];

        for (letter, pattern) in letters("CAT").into_iter().zip(expected) {
            let (next, verdict) = state.guess(letter).unwrap();
            assert_eq!(verdict, Verdict::Correct { revealed: 1 });
            assert_eq!(next.revealed(), pattern);
            state = next;
        }

        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts_remaining(), 8);
    }

    #[test]
    fn hard_keyboard_is_lost_after_four_misses() {
        let mut state = round(Tier::Hard, "KEYBOARD");
        let mut remaining = Vec::new();

        for letter in letters("ZXQW") {
            let (next, verdict) = state.guess(letter).unwrap();
            assert_eq!(verdict, Verdict::Incorrect);
            remaining.push(next.attempts_remaining());
            state = next;
        }

        assert_eq!(remaining, vec![3, 2, 1, 0]);
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.revealed(), b"________");
    }

    #[test]
    fn repeated_letter_reveals_all_positions_for_free() {
        let state = round(Tier::Medium, "BOOK");
        let (next, verdict) = state.guess(Letter::new('o').unwrap()).unwrap();

        assert_eq!(verdict, Verdict::Correct { revealed: 2 });
        assert_eq!(next.revealed(), b"_OO_");
        assert_eq!(next.attempts_remaining(), state.attempts_remaining());
    }

    #[test]
    fn duplicate_guess_is_rejected_without_change() {
        let state = round(Tier::Easy, "DOG");
        let (state, _) = state.guess(Letter::new('Z').unwrap()).unwrap();
        let (state, _) = state.guess(Letter::new('D').unwrap()).unwrap();

        for c in ['Z', 'D'] {
            let letter = Letter::new(c).unwrap();
            assert_eq!(state.guess(letter), Err(InputError::DuplicateGuess(letter)));
        }
        assert_eq!(state.guessed(), letters("ZD").as_slice());
        assert_eq!(state.attempts_remaining(), 7);
        assert_eq!(state.revealed(), b"D__");
    }

    #[test]
    fn validate_guess_checks_format_then_duplicates() {
        let (state, _) = round(Tier::Easy, "FISH")
            .guess(Letter::new('S').unwrap())
            .unwrap();

        assert_eq!(state.validate_guess("h"), Ok(Letter::new('H').unwrap()));
        assert_eq!(
            state.validate_guess("s"),
            Err(InputError::DuplicateGuess(Letter::new('S').unwrap()))
        );
        assert_eq!(
            state.validate_guess("sh"),
            Err(InputError::InvalidGuessFormat(FormatIssue::NotSingleCharacter))
        );
        assert_eq!(
            state.validate_guess("#"),
            Err(InputError::InvalidGuessFormat(FormatIssue::NotALetter))
        );
    }

    #[test]
    fn completing_guess_wins_on_last_attempt() {
        // Three misses leave one attempt on Hard
        let state = RoundState::replay(
            Tier::Hard,
            Word::new("CAT").unwrap(),
            "hint",
            &letters("CAXYZ"),
        )
        .unwrap();
        assert_eq!(state.attempts_remaining(), 1);
        assert_eq!(state.outcome(), Outcome::InProgress);

        let (state, verdict) = state.guess(Letter::new('T').unwrap()).unwrap();
        assert!(verdict.is_correct());
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts_remaining(), 1);
    }

    #[test]
    fn guesses_after_resolution_are_rejected() {
        let won = RoundState::replay(Tier::Easy, Word::new("CAT").unwrap(), "", &letters("CAT"))
            .unwrap();
        assert_eq!(won.guess(Letter::new('Z').unwrap()), Err(InputError::RoundOver));

        let lost = RoundState::replay(Tier::Hard, Word::new("CAT").unwrap(), "", &letters("QWXZ"))
            .unwrap();
        assert_eq!(lost.outcome(), Outcome::Lost);
        assert_eq!(lost.guess(Letter::new('C').unwrap()), Err(InputError::RoundOver));
    }

    #[test]
    fn replay_matches_step_by_step_play() {
        let word = Word::new("ELEPHANT").unwrap();
        let sequence = letters("EQTRPA");

        let mut stepped = RoundState::new(Tier::Hard, word.clone(), "trunk");
        for &letter in &sequence {
            stepped = stepped.guess(letter).unwrap().0;
        }

        let replayed = RoundState::replay(Tier::Hard, word, "trunk", &sequence).unwrap();
        assert_eq!(replayed, stepped);
        assert_eq!(replayed.revealed(), b"E_EP_A_T");
        assert_eq!(replayed.attempts_remaining(), 2);
    }

    #[test]
    fn every_sequence_keeps_attempts_in_bounds() {
        let word = Word::new("BUTTERFLY").unwrap();
        let mut state = RoundState::new(Tier::Medium, word.clone(), "wings");

        for letter in letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ") {
            let before = state.attempts_remaining();
            match state.guess(letter) {
                Ok((next, verdict)) => {
                    let expected = if word.has_letter(letter) { before } else { before - 1 };
                    assert_eq!(next.attempts_remaining(), expected);
                    assert_eq!(verdict.is_correct(), word.has_letter(letter));
                    assert!(next.attempts_remaining() <= next.budget());
                    state = next;
                }
                Err(err) => {
                    assert_eq!(err, InputError::RoundOver);
                    break;
                }
            }
        }

        assert!(state.is_over());
        assert_eq!(
            state.outcome() == Outcome::Lost,
            state.attempts_remaining() == 0 && !state.is_fully_revealed()
        );
    }
}
