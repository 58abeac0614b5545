// Library interface for terminal-games
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod guess;
pub mod interrupt;
pub mod logging;
pub mod outcome;
pub mod render;
pub mod rng;
pub mod round;
pub mod rps;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, GuessError, Result};
pub use guess::{Guess, GuessResult, apply, apply_guess, parse_guess};
pub use outcome::{Outcome, evaluate};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use round::{Difficulty, RoundState};
pub use session::{Cue, GameInterface, Session, SessionOptions, SessionTally};
pub use wordbank::{EMBEDDED_WORDBANK, WordBank, load_wordbank_from_str};
