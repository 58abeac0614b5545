//! Hangman session loop.
//!
//! A session alternates between `Playing` (one full round) and
//! `AwaitingReplay` until the player says no or input runs out. All terminal
//! work goes through [`GameInterface`], so the loop runs the same against the
//! line CLI, the TUI, or a scripted test double.

use crate::error::{GameError, GuessError, Result};
use crate::guess::{GuessResult, apply_guess};
use crate::outcome::{Outcome, evaluate};
use crate::rng::RandomSource;
use crate::round::{Difficulty, RoundState};
use crate::wordbank::{WordBank, WordCategory};
use crate::{debug_log, info_log};

/// Sound cue kinds. How they sound is up to the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Ok,
    Bad,
    Win,
    Lose,
    Tie,
}

/// Wins over games played, kept for the life of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub games_played: u32,
    pub games_won: u32,
}

impl SessionTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => {
                self.games_played += 1;
                self.games_won += 1;
            }
            Outcome::Lost => self.games_played += 1,
            Outcome::Continue => {}
        }
    }
}

/// Presentation side of a Hangman session.
///
/// `read_*` methods return `None` once input is closed (EOF, interrupt,
/// Esc in the TUI); the session then ends gracefully.
pub trait GameInterface {
    fn display_welcome(&mut self);
    fn read_category(&mut self, categories: &[&str]) -> Option<String>;
    fn display_invalid_category(&mut self, input: &str);
    fn read_difficulty(&mut self) -> Option<String>;
    fn display_invalid_difficulty(&mut self, input: &str);
    fn display_round_start(&mut self, category: &str, letters: usize);
    fn render(&mut self, state: &RoundState);
    fn read_guess(&mut self) -> Option<String>;
    fn display_guess_result(&mut self, result: GuessResult, state: &RoundState);
    fn display_rejection(&mut self, error: GuessError);
    fn display_outcome(&mut self, outcome: Outcome, state: &RoundState);
    fn display_tally(&mut self, tally: &SessionTally);
    fn read_replay(&mut self) -> Option<String>;
    fn display_farewell(&mut self);
    fn play_cue(&mut self, cue: Cue);
}

/// Choices fixed for every round, usually from the command line.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Playing,
    AwaitingReplay,
    Finished,
}

/// Resolve a typed category: empty picks one at random, otherwise a
/// case-insensitive match is required.
pub fn resolve_category<'a>(
    bank: &'a WordBank,
    input: &str,
    rng: &mut dyn RandomSource,
) -> Result<&'a WordCategory> {
    let input = input.trim();
    if input.is_empty() {
        return bank.random_category(rng);
    }
    bank.category(input)
        .ok_or_else(|| GameError::UnknownCategory(input.to_string()))
}

/// Resolve a typed difficulty: empty means normal.
pub fn resolve_difficulty(input: &str) -> Result<Difficulty> {
    if input.trim().is_empty() {
        return Ok(Difficulty::default());
    }
    input.parse()
}

/// Anything but an explicit no starts another round.
pub fn wants_another_round(answer: &str) -> bool {
    !matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

pub struct Session<R: RandomSource> {
    bank: WordBank,
    rng: R,
    options: SessionOptions,
    tally: SessionTally,
}

impl<R: RandomSource> Session<R> {
    /// Fails on an empty word bank or a preset category the bank lacks.
    pub fn new(bank: WordBank, rng: R, options: SessionOptions) -> Result<Self> {
        if bank.is_empty() {
            return Err(GameError::EmptyWordBank);
        }
        if let Some(name) = &options.category
            && bank.category(name).is_none()
        {
            return Err(GameError::UnknownCategory(name.clone()));
        }
        Ok(Self {
            bank,
            rng,
            options,
            tally: SessionTally::default(),
        })
    }

    pub fn tally(&self) -> SessionTally {
        self.tally
    }

    /// Play rounds until the player declines a replay or input closes.
    pub fn run(&mut self, ui: &mut dyn GameInterface) -> Result<SessionTally> {
        let mut state = SessionState::Playing;
        loop {
            debug_log!("run() - state {:?}", state);
            state = match state {
                SessionState::Playing => {
                    ui.display_welcome();
                    match self.play_round(ui)? {
                        Some(outcome) => {
                            self.tally.record(outcome);
                            info_log!(
                                "run() - tally {}/{}",
                                self.tally.games_won,
                                self.tally.games_played
                            );
                            ui.display_tally(&self.tally);
                            SessionState::AwaitingReplay
                        }
                        None => SessionState::Finished,
                    }
                }
                SessionState::AwaitingReplay => match ui.read_replay() {
                    Some(answer) if wants_another_round(&answer) => SessionState::Playing,
                    _ => SessionState::Finished,
                },
                SessionState::Finished => break,
            };
        }
        ui.display_farewell();
        Ok(self.tally)
    }

    /// Play one round to completion. `None` means input closed mid-round.
    pub fn play_round(&mut self, ui: &mut dyn GameInterface) -> Result<Option<Outcome>> {
        let Some(category) = self.choose_category(ui)? else {
            return Ok(None);
        };
        let Some(difficulty) = self.choose_difficulty(ui) else {
            return Ok(None);
        };
        let word = self
            .bank
            .category(&category)
            .ok_or_else(|| GameError::UnknownCategory(category.clone()))?
            .pick_word(&mut self.rng)?;
        let mut round = RoundState::new(word, difficulty.lives())?;
        info_log!(
            "play_round() - category '{}', difficulty {}, {} letters",
            category,
            difficulty,
            round.secret().len()
        );

        ui.display_round_start(&category, round.secret().len());
        ui.render(&round);

        loop {
            let Some(input) = ui.read_guess() else {
                return Ok(None);
            };
            match apply_guess(&mut round, &input, &mut self.rng) {
                Ok(result) => {
                    ui.display_guess_result(result, &round);
                    ui.play_cue(if result.is_hit() { Cue::Ok } else { Cue::Bad });
                    ui.render(&round);
                }
                Err(error) => {
                    ui.display_rejection(error);
                    ui.play_cue(Cue::Bad);
                    continue;
                }
            }

            let outcome = evaluate(&round);
            if outcome.is_finished() {
                info_log!("play_round() - round finished: {:?}", outcome);
                ui.display_outcome(outcome, &round);
                let cue = if outcome == Outcome::Won {
                    Cue::Win
                } else {
                    Cue::Lose
                };
                ui.play_cue(cue);
                return Ok(Some(outcome));
            }
        }
    }

    fn choose_category(&mut self, ui: &mut dyn GameInterface) -> Result<Option<String>> {
        if let Some(name) = &self.options.category {
            return Ok(Some(name.trim().to_lowercase()));
        }
        let names = self.bank.names();
        loop {
            let Some(input) = ui.read_category(&names) else {
                return Ok(None);
            };
            match resolve_category(&self.bank, &input, &mut self.rng) {
                Ok(category) => return Ok(Some(category.name().to_string())),
                Err(GameError::UnknownCategory(_)) => ui.display_invalid_category(input.trim()),
                Err(other) => return Err(other),
            }
        }
    }

    fn choose_difficulty(&mut self, ui: &mut dyn GameInterface) -> Option<Difficulty> {
        if let Some(difficulty) = self.options.difficulty {
            return Some(difficulty);
        }
        loop {
            let input = ui.read_difficulty()?;
            match resolve_difficulty(&input) {
                Ok(difficulty) => return Some(difficulty),
                Err(_) => ui.display_invalid_difficulty(input.trim()),
            }
        }
    }
}
