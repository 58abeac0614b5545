//! Rock-Paper-Scissors against the computer.

use crate::rng::{RandomSource, choose};
use crate::session::Cue;
use crate::{debug_log, info_log};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Rock => "🪨",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Win,
    Lose,
    Tie,
}

impl RoundResult {
    pub fn cue(self) -> Cue {
        match self {
            Self::Win => Cue::Win,
            Self::Lose => Cue::Lose,
            Self::Tie => Cue::Tie,
        }
    }
}

/// Result from the human's point of view.
pub fn judge(human: Move, computer: Move) -> RoundResult {
    if human == computer {
        RoundResult::Tie
    } else if human.beats() == computer {
        RoundResult::Win
    } else {
        RoundResult::Lose
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpsInput {
    Play(Move),
    Quit,
    Invalid,
}

pub fn parse_input(input: &str) -> RpsInput {
    let input = input.trim().to_lowercase();
    if input == "q" {
        return RpsInput::Quit;
    }
    Move::ALL
        .into_iter()
        .find(|m| m.name() == input)
        .map_or(RpsInput::Invalid, RpsInput::Play)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HumanChampion,
    ComputerReigns,
    Draw,
}

/// Running score. Ties count for nobody.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human: u32,
    pub computer: u32,
    pub rounds: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: RoundResult) {
        self.rounds += 1;
        match result {
            RoundResult::Win => self.human += 1,
            RoundResult::Lose => self.computer += 1,
            RoundResult::Tie => {}
        }
    }

    /// `None` until at least one round has been played.
    pub fn verdict(&self) -> Option<Verdict> {
        if self.rounds == 0 {
            return None;
        }
        Some(match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Verdict::HumanChampion,
            std::cmp::Ordering::Less => Verdict::ComputerReigns,
            std::cmp::Ordering::Equal => Verdict::Draw,
        })
    }
}

impl Verdict {
    pub fn cue(self) -> Cue {
        match self {
            Self::HumanChampion => Cue::Win,
            Self::ComputerReigns => Cue::Lose,
            Self::Draw => Cue::Tie,
        }
    }
}

pub const TAUNTS: [&str; 5] = [
    "👀 Running away already? I barely warmed up.",
    "😏 You scared?",
    "🏃 Fleeing the battlefield, are we?",
    "😆 Rage quit! Classic move.",
    "😴 Bored of losing, huh?",
];

pub const WIN_COMMENTS: [&str; 3] = [
    "You're on fire! 🔥",
    "Slayed it! ⚔️",
    "Teach me your ways, sensei. 🧘‍♂️",
];

pub const LOSE_COMMENTS: [&str; 3] = [
    "Oof. That was rough. 😬",
    "Computer flexed hard! 🤖💪",
    "Might wanna Google strategy... 📉",
];

pub const TIE_COMMENTS: [&str; 3] = [
    "A draw? Psychic much? 🔮",
    "It's a mirror match! 😶",
    "Mind meld activated! 🧠",
];

fn comment_for(result: RoundResult, rng: &mut dyn RandomSource) -> &'static str {
    let pool: &[&'static str] = match result {
        RoundResult::Win => &WIN_COMMENTS,
        RoundResult::Lose => &LOSE_COMMENTS,
        RoundResult::Tie => &TIE_COMMENTS,
    };
    choose(rng, pool).copied().unwrap_or_default()
}

/// Presentation side of a Rock-Paper-Scissors game.
pub trait RpsInterface {
    fn display_rps_welcome(&mut self);
    fn read_move(&mut self) -> Option<String>;
    fn display_invalid_move(&mut self);
    fn display_countdown(&mut self);
    fn display_round(&mut self, human: Move, computer: Move, result: RoundResult, comment: &str);
    fn display_quit(&mut self, taunt: &str);
    fn read_play_again(&mut self) -> Option<String>;
    fn display_score(&mut self, board: &Scoreboard);
    fn display_final(&mut self, board: &Scoreboard, verdict: Verdict);
    fn display_rps_goodbye(&mut self);
    fn play_cue(&mut self, cue: Cue);
}

/// Play until the player quits or declines another round.
pub fn play_session(rng: &mut dyn RandomSource, ui: &mut dyn RpsInterface) -> Scoreboard {
    let mut board = Scoreboard::default();
    ui.display_rps_welcome();

    while let Some(input) = ui.read_move() {
        let human = match parse_input(&input) {
            RpsInput::Play(m) => m,
            RpsInput::Quit => {
                let taunt = choose(rng, &TAUNTS).copied().unwrap_or_default();
                ui.display_quit(taunt);
                ui.play_cue(Cue::Lose);
                break;
            }
            RpsInput::Invalid => {
                debug_log!("play_session() - invalid move '{}'", input.trim());
                ui.display_invalid_move();
                continue;
            }
        };

        ui.display_countdown();
        let computer = Move::ALL[rng.choose_index(Move::ALL.len())];
        let result = judge(human, computer);
        let comment = comment_for(result, rng);
        info_log!("play_session() - {} vs {}: {:?}", human, computer, result);
        ui.display_round(human, computer, result, comment);
        ui.play_cue(result.cue());
        board.record(result);

        match ui.read_play_again() {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => ui.display_score(&board),
            _ => break,
        }
    }

    if let Some(verdict) = board.verdict() {
        ui.display_final(&board, verdict);
        ui.play_cue(verdict.cue());
    }
    ui.display_rps_goodbye();
    board
}
