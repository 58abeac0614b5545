use crate::error::GuessError;
use crate::rng::RandomSource;
use crate::round::RoundState;
use crate::{debug_log, info_log};

/// The literal token that asks for a hint.
pub const HINT_KEYWORD: &str = "hint";

/// A validated player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Hint,
}

/// What an accepted guess did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Hit(char),
    Miss(char),
    HintRevealed(char),
}

impl GuessResult {
    pub fn letter(self) -> char {
        match self {
            Self::Hit(c) | Self::Miss(c) | Self::HintRevealed(c) => c,
        }
    }

    pub fn is_hit(self) -> bool {
        !matches!(self, Self::Miss(_))
    }
}

/// Trim and lowercase raw input, then classify it.
pub fn parse_guess(input: &str) -> Result<Guess, GuessError> {
    let input = input.trim().to_lowercase();
    if input == HINT_KEYWORD {
        return Ok(Guess::Hint);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(Guess::Letter(c)),
        _ => Err(GuessError::InvalidInput),
    }
}

/// Parse `input` and apply it to `state`.
///
/// On `Err` the round is untouched.
pub fn apply_guess(
    state: &mut RoundState,
    input: &str,
    rng: &mut dyn RandomSource,
) -> Result<GuessResult, GuessError> {
    let guess = parse_guess(input).inspect_err(|_| {
        debug_log!("apply_guess() - rejected invalid input '{}'", input.trim());
    })?;
    apply(state, guess, rng)
}

/// Apply an already parsed guess to `state`.
pub fn apply(
    state: &mut RoundState,
    guess: Guess,
    rng: &mut dyn RandomSource,
) -> Result<GuessResult, GuessError> {
    if state.is_over() {
        log::warn!("guess {guess:?} applied to a finished round");
    }
    match guess {
        Guess::Letter(letter) => apply_letter(state, letter),
        Guess::Hint => apply_hint(state, rng),
    }
}

fn apply_letter(state: &mut RoundState, letter: char) -> Result<GuessResult, GuessError> {
    if state.has_guessed(letter) {
        debug_log!("apply_letter() - duplicate '{}'", letter);
        return Err(GuessError::DuplicateGuess);
    }
    state.record_letter(letter);
    if state.contains(letter) {
        info_log!("apply_letter() - hit '{}'", letter);
        Ok(GuessResult::Hit(letter))
    } else {
        state.lose_life();
        info_log!(
            "apply_letter() - miss '{}', {} lives left",
            letter,
            state.lives_left()
        );
        Ok(GuessResult::Miss(letter))
    }
}

fn apply_hint(
    state: &mut RoundState,
    rng: &mut dyn RandomSource,
) -> Result<GuessResult, GuessError> {
    if state.hint_used() {
        return Err(GuessError::HintExhausted);
    }
    // A fully revealed word leaves the hint unspent.
    let hidden = state.unrevealed_letters();
    if hidden.is_empty() {
        return Err(GuessError::NoHintAvailable);
    }
    let letter = hidden[rng.choose_index(hidden.len())];
    state.record_letter(letter);
    state.mark_hint_used();
    info_log!("apply_hint() - revealed '{}'", letter);
    Ok(GuessResult::HintRevealed(letter))
}
