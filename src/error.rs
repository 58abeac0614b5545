use std::io;
use thiserror::Error;

/// A guess the round refused to apply.
///
/// Every variant is recoverable by asking again, and a rejected guess never
/// touches the round state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a single A-Z letter.")]
    InvalidInput,

    #[error("You already guessed that. Try another.")]
    DuplicateGuess,

    #[error("You already used your hint this game.")]
    HintExhausted,

    #[error("No hint available, all letters already revealed.")]
    NoHintAvailable,
}

/// Failures outside the guess loop: building a round, resolving command-line
/// choices, talking to the terminal.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("secret word must be non-empty and alphabetic, got '{0}'")]
    InvalidSecret(String),

    #[error("a round needs at least one life")]
    NoLives,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),

    #[error("word bank is empty")]
    EmptyWordBank,

    #[error("category '{0}' has no words")]
    EmptyCategory(String),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
