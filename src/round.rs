use crate::error::{GameError, Result};
use clap::ValueEnum;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How many wrong guesses a round allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    #[must_use]
    pub fn lives(self) -> u8 {
        match self {
            Self::Easy => 8,
            Self::Normal => 6,
            Self::Hard => 5,
            Self::Insane => 4,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Insane => "insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| GameError::UnknownDifficulty(s.trim().to_string()))
    }
}

/// Mutable state of one Hangman round.
///
/// `secret` and `total_lives` are fixed at construction. The guessed set only
/// grows, `lives_left` only drops (on a wrong letter) and `hint_used` flips
/// at most once. The guess processor is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret: String,
    guessed: BTreeSet<char>,
    total_lives: u8,
    lives_left: u8,
    hint_used: bool,
}

impl RoundState {
    /// Start a round. The secret is lowercased and must be non-empty ASCII
    /// letters; at least one life is required.
    pub fn new(secret: &str, total_lives: u8) -> Result<Self> {
        let secret = secret.trim().to_lowercase();
        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidSecret(secret));
        }
        if total_lives == 0 {
            return Err(GameError::NoLives);
        }
        Ok(Self {
            secret,
            guessed: BTreeSet::new(),
            total_lives,
            lives_left: total_lives,
            hint_used: false,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn total_lives(&self) -> u8 {
        self.total_lives
    }

    pub fn lives_left(&self) -> u8 {
        self.lives_left
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.secret.contains(letter)
    }

    /// Every letter of the secret has been guessed.
    pub fn is_won(&self) -> bool {
        self.secret.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.lives_left == 0 && !self.is_won()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn mistake_count(&self) -> u8 {
        self.total_lives - self.lives_left
    }

    /// Distinct letters of the secret not yet guessed, in alphabetical order.
    pub fn unrevealed_letters(&self) -> Vec<char> {
        let letters: BTreeSet<char> = self
            .secret
            .chars()
            .filter(|c| !self.guessed.contains(c))
            .collect();
        letters.into_iter().collect()
    }

    /// The secret with unguessed letters as `_`, space separated.
    pub fn masked_word(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn record_letter(&mut self, letter: char) -> bool {
        self.guessed.insert(letter)
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives_left = self.lives_left.saturating_sub(1);
    }

    pub(crate) fn mark_hint_used(&mut self) {
        self.hint_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_initial_state() {
        let round = RoundState::new("Cat", 6).unwrap();
        assert_eq!(round.secret(), "cat");
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.lives_left(), 6);
        assert_eq!(round.total_lives(), 6);
        assert!(!round.hint_used());
        assert_eq!(round.mistake_count(), 0);
        assert!(!round.is_won());
        assert!(!round.is_lost());
    }

    #[test]
    fn test_new_round_rejects_bad_input() {
        for secret in ["", "ice cream", "r2d2"] {
            let result = RoundState::new(secret, 6);
            assert!(matches!(result, Err(GameError::InvalidSecret(_))));
        }
        assert!(matches!(RoundState::new("cat", 0), Err(GameError::NoLives)));
    }

    #[test]
    fn test_masked_word_and_unrevealed() {
        let mut round = RoundState::new("banana", 6).unwrap();
        assert_eq!(round.masked_word(), "_ _ _ _ _ _");
        assert_eq!(round.unrevealed_letters(), vec!['a', 'b', 'n']);
        round.record_letter('a');
        assert_eq!(round.masked_word(), "_ a _ a _ a");
        assert_eq!(round.unrevealed_letters(), vec!['b', 'n']);
    }

    #[test]
    fn test_won_when_all_letters_guessed() {
        let mut round = RoundState::new("ox", 4).unwrap();
        round.record_letter('o');
        assert!(!round.is_won());
        round.record_letter('x');
        assert!(round.is_won());
        assert!(round.is_over());
    }

    #[test]
    fn test_lost_needs_zero_lives_and_not_won() {
        let mut round = RoundState::new("ox", 1).unwrap();
        round.record_letter('o');
        round.record_letter('x');
        round.lose_life();
        // Won beats lost even with no lives left
        assert!(round.is_won());
        assert!(!round.is_lost());

        let mut round = RoundState::new("ox", 1).unwrap();
        round.lose_life();
        assert!(round.is_lost());
        assert_eq!(round.mistake_count(), 1);
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut round = RoundState::new("ox", 1).unwrap();
        round.lose_life();
        round.lose_life();
        assert_eq!(round.lives_left(), 0);
        assert_eq!(round.mistake_count(), 1);
    }

    #[test]
    fn test_difficulty_lives_and_parse() {
        assert_eq!(Difficulty::Easy.lives(), 8);
        assert_eq!(Difficulty::Normal.lives(), 6);
        assert_eq!(Difficulty::Hard.lives(), 5);
        assert_eq!(Difficulty::Insane.lives(), 4);
        assert_eq!(Difficulty::default(), Difficulty::Normal);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            " insane ".parse::<Difficulty>().unwrap(),
            Difficulty::Insane
        );
        assert!(matches!(
            "brutal".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty(name)) if name == "brutal"
        ));
    }
}
