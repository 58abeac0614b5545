use crate::error::GuessError;
use crate::guess::GuessResult;
use crate::outcome::Outcome;
use crate::render::{self, Danger, LetterMark};
use crate::round::{Difficulty, RoundState};
use crate::rps::{Move, RoundResult, RpsInterface, Scoreboard, Verdict};
use crate::session::{Cue, GameInterface, SessionTally};
use crate::{debug_log, info_log};
use clap::{Args, Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Hangman and Rock-Paper-Scissors in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the random number generator for a reproducible session
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Plain text output: no colors, animations, pauses or bells
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play Hangman (the default)
    Hangman(HangmanArgs),
    /// Play Rock-Paper-Scissors against the computer
    Rps,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct HangmanArgs {
    /// Word category for every round instead of asking
    #[arg(short, long)]
    pub category: Option<String>,

    /// Difficulty for every round instead of asking
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

impl Cli {
    /// The chosen subcommand, Hangman when none was given.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Hangman(HangmanArgs::default()))
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const MESSAGE_PAUSE: Duration = Duration::from_millis(500);
const COUNTDOWN_PAUSE: Duration = Duration::from_millis(500);
const WAVE_FRAME: Duration = Duration::from_millis(50);
const WAVE_CYCLES: usize = 20;
const WAVE_SPAN: usize = 10;
const RAINBOW: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Line-oriented interface over any reader and writer.
///
/// Plain by default; [`CliInterface::with_effects`] turns on colors, screen
/// clearing, banner animation, pauses and terminal bells.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    out: W,
    effects: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            reader,
            out,
            effects: false,
        }
    }

    #[must_use]
    pub fn with_effects(mut self) -> Self {
        self.effects = true;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            log::warn!("write failed: {e}");
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.effects {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.effects {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Print a prompt and read one line. `None` on end of input.
    fn prompt(&mut self, prompt: &str, color: Color) -> Option<String> {
        let painted = self.paint(prompt, color);
        if let Err(e) = write!(self.out, "{painted}").and_then(|()| self.out.flush()) {
            log::warn!("prompt write failed: {e}");
        }
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => {
                info_log!("prompt() - input closed");
                None
            }
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                log::warn!("read failed: {e}");
                None
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        if self.effects {
            let _ = self.out.flush();
            thread::sleep(duration);
        }
    }

    fn clear_screen(&mut self) {
        if self.effects
            && let Err(e) = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
        {
            debug_log!("clear_screen() - {}", e);
        }
    }

    fn bell(&mut self, times: usize, gap: Duration) {
        if !self.effects {
            return;
        }
        for i in 0..times {
            if i > 0 {
                thread::sleep(gap);
            }
            let _ = write!(self.out, "\x07").and_then(|()| self.out.flush());
        }
    }

    fn rainbow(&self, text: &str, phase: usize) -> String {
        if !self.effects {
            return text.to_string();
        }
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let color = RAINBOW[(i + phase) % RAINBOW.len()];
                c.with(color).to_string()
            })
            .collect()
    }

    /// Bright, normal and dim bands sweeping across a single color.
    fn mono_wave(text: &str, color: Color, phase: usize) -> String {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                if c == ' ' {
                    return " ".to_string();
                }
                match (i + phase) % WAVE_SPAN {
                    0 | 1 => c.with(color).bold().to_string(),
                    2..=4 => c.with(color).to_string(),
                    _ => c.with(color).dim().to_string(),
                }
            })
            .collect()
    }

    /// Redraw `lines` in place for a few frames, then leave the last frame.
    fn animate(&mut self, lines: &[String], frame: impl Fn(&Self, &str, usize) -> String) {
        if !self.effects {
            for line in lines {
                self.say(line);
            }
            return;
        }
        for phase in 0..=WAVE_CYCLES {
            if phase > 0 {
                let up = u16::try_from(lines.len()).unwrap_or(u16::MAX);
                let _ = queue!(self.out, crossterm::cursor::MoveUp(up));
            }
            for line in lines {
                let painted = frame(self, line, phase);
                self.say(painted);
            }
            self.pause(WAVE_FRAME);
        }
    }

    fn banner(&mut self, message: &str, color: Color) {
        let lines = render::big_text(message);
        self.animate(&lines, |_, line, phase| Self::mono_wave(line, color, phase));
    }

    fn terminal_width() -> usize {
        crossterm::terminal::size().map_or(80, |(w, _)| usize::from(w))
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self) {
        self.clear_screen();
        let welcome = self.rainbow("WELCOME TO", 0);
        self.say(welcome);
        let title = render::big_text("HANGMAN");
        let fits = render::banner_width(&title) + 2 <= Self::terminal_width();
        if self.effects && fits {
            self.animate(&title, |me, line, phase| me.rainbow(line, phase));
        } else {
            let compact = ["HANGMAN".to_string()];
            self.animate(&compact, |me, line, phase| me.rainbow(line, phase));
        }
    }

    fn read_category(&mut self, categories: &[&str]) -> Option<String> {
        let header = self.paint("\nCategories: ", Color::Cyan);
        self.say(format!("{header}{}", categories.join(", ")));
        self.prompt("Pick a category (or press Enter for random): ", Color::Cyan)
    }

    fn display_invalid_category(&mut self, input: &str) {
        debug_log!("display_invalid_category() - '{}'", input);
        let message = self.paint("Invalid category. Try again.", Color::Yellow);
        self.say(message);
    }

    fn read_difficulty(&mut self) -> Option<String> {
        let levels: Vec<String> = Difficulty::ALL
            .iter()
            .map(|d| format!("{}({} lives)", d.name(), d.lives()))
            .collect();
        let line = format!("\nDifficulty: {}", levels.join(", "));
        let header = self.paint(&line, Color::Magenta);
        self.say(header);
        self.prompt(
            "Pick difficulty [easy/normal/hard/insane] (Enter=normal): ",
            Color::Magenta,
        )
    }

    fn display_invalid_difficulty(&mut self, input: &str) {
        debug_log!("display_invalid_difficulty() - '{}'", input);
        let message = self.paint("Invalid difficulty. Try again.", Color::Yellow);
        self.say(message);
    }

    fn display_round_start(&mut self, category: &str, letters: usize) {
        let line = format!(
            "\nCategory: {} | Letters: {letters}",
            render::title_case(category)
        );
        let painted = self.paint(&line, Color::Cyan);
        self.say(painted);
        self.pause(MESSAGE_PAUSE);
    }

    fn render(&mut self, state: &RoundState) {
        self.clear_screen();
        let mistakes = state.mistake_count();
        let color = match render::danger(mistakes) {
            Danger::Safe => Color::Green,
            Danger::Warning => Color::Yellow,
            Danger::Critical => Color::Red,
        };
        let gallows = self.paint(render::gallows(mistakes), color);
        self.say(gallows);

        let word = format!(
            "\n{}{}",
            self.bold("Word: "),
            self.paint(&state.masked_word(), Color::Cyan)
        );
        self.say(word);

        let letters: Vec<String> = render::alphabet(state)
            .into_iter()
            .map(|(c, mark)| {
                let color = match mark {
                    LetterMark::Correct => Color::Green,
                    LetterMark::Wrong => Color::Red,
                    LetterMark::Unused => Color::DarkGrey,
                };
                self.paint(&c.to_string(), color)
            })
            .collect();
        let alphabet = format!("{}{}", self.bold("Letters: "), letters.join(" "));
        self.say(alphabet);

        let (full, empty) = render::lives_bar(state);
        let label = format!("Lives: {}/{} ", state.lives_left(), state.total_lives());
        let lives = format!(
            "{}{}{}\n",
            self.bold(&label),
            self.paint(&full, Color::Red),
            self.paint(&empty, Color::DarkGrey)
        );
        self.say(lives);
    }

    fn read_guess(&mut self) -> Option<String> {
        self.prompt("Guess a letter (or type 'hint' once): ", Color::Blue)
    }

    fn display_guess_result(&mut self, result: GuessResult, state: &RoundState) {
        let message = match result {
            GuessResult::Hit(c) => self.paint(
                &format!("Nice! '{}' is in the word.", c.to_ascii_uppercase()),
                Color::Green,
            ),
            GuessResult::Miss(c) => self.paint(
                &format!(
                    "Sorry, '{}' is not in the word. Lives left: {}",
                    c.to_ascii_uppercase(),
                    state.lives_left()
                ),
                Color::Red,
            ),
            GuessResult::HintRevealed(c) => self.paint(
                &format!("Hint reveals: '{}'", c.to_ascii_uppercase()),
                Color::Magenta,
            ),
        };
        self.say(message);
        self.pause(MESSAGE_PAUSE);
    }

    fn display_rejection(&mut self, error: GuessError) {
        let message = self.paint(&error.to_string(), Color::Yellow);
        self.say(message);
    }

    fn display_outcome(&mut self, outcome: Outcome, state: &RoundState) {
        match outcome {
            Outcome::Won => {
                self.banner("YOU WIN!", Color::Green);
                let boxed = self.paint(render::WIN_BOX, Color::Green);
                self.say(boxed);
            }
            Outcome::Lost => {
                self.banner("YOU LOSE", Color::Red);
                let boxed = self.paint(render::LOSE_BOX, Color::Red);
                self.say(boxed);
                let reveal = self.paint(
                    &format!("The word was: {}", state.secret().to_uppercase()),
                    Color::Yellow,
                );
                self.say(reveal);
            }
            Outcome::Continue => {}
        }
    }

    fn display_tally(&mut self, tally: &SessionTally) {
        let line = format!("\nScore: {}/{}", tally.games_won, tally.games_played);
        let score = self.bold(&line);
        self.say(score);
    }

    fn read_replay(&mut self) -> Option<String> {
        self.prompt("\nPlay again? [Y/n]: ", Color::Cyan)
    }

    fn display_farewell(&mut self) {
        let bye = self.paint("\nThanks for playing! Bye.", Color::Magenta);
        self.say(bye);
    }

    fn play_cue(&mut self, cue: Cue) {
        debug_log!("play_cue() - {:?}", cue);
        match cue {
            Cue::Ok => self.bell(1, Duration::ZERO),
            Cue::Bad | Cue::Tie => self.bell(2, Duration::from_millis(80)),
            Cue::Win => self.bell(3, Duration::from_millis(120)),
            Cue::Lose => self.bell(2, Duration::from_millis(200)),
        }
    }
}

impl<R: BufRead, W: Write> RpsInterface for CliInterface<R, W> {
    fn display_rps_welcome(&mut self) {
        self.say("\nWelcome to Rock, Paper, Scissors! Let the games begin! 🎮");
    }

    fn read_move(&mut self) -> Option<String> {
        self.say("\nChoose Rock, Paper, Scissors or 'q' to Quit:");
        self.prompt("\n👉 ", Color::Reset)
    }

    fn display_invalid_move(&mut self) {
        self.say("\n❌ Invalid choice. That's not how we roll here!😤\n");
    }

    fn display_countdown(&mut self) {
        let steps = [
            format!("\nRock... {}", Move::Rock.icon()),
            format!("Paper... {}", Move::Paper.icon()),
            format!("Scissors... {}", Move::Scissors.icon()),
            "SHOOT! 💥".to_string(),
        ];
        for step in steps {
            self.say(step);
            self.pause(COUNTDOWN_PAUSE);
        }
    }

    fn display_round(&mut self, _human: Move, computer: Move, result: RoundResult, comment: &str) {
        let chose = format!("\n🤖 Computer chose: {computer} {}", computer.icon());
        self.say(chose);
        let line = match result {
            RoundResult::Tie => format!("\n🤝 It's a tie! {comment}"),
            RoundResult::Win => format!("\n✅ You win! {comment}"),
            RoundResult::Lose => format!("\n❌ You lose! {comment}"),
        };
        self.say(line);
    }

    fn display_quit(&mut self, taunt: &str) {
        self.say(format!("\n{taunt}"));
        self.say("👋 Fine... Exiting with ahem... style...off you go then! 😏");
    }

    fn read_play_again(&mut self) -> Option<String> {
        self.say("\n🔁 Play again? (y/n)");
        let answer = self.prompt("👉 ", Color::Reset);
        if !answer
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case("y"))
        {
            self.say("\n🎭 Game over! Time for final judgment...");
        }
        answer
    }

    fn display_score(&mut self, board: &Scoreboard) {
        self.say(format!(
            "\n📊 Current Score - You: {} | Computer: {}",
            board.human, board.computer
        ));
    }

    fn display_final(&mut self, board: &Scoreboard, verdict: Verdict) {
        self.say(format!(
            "🏁 Final Score - You: {} | Computer: {}",
            board.human, board.computer
        ));
        let line = match verdict {
            Verdict::HumanChampion => "🎉 Victory dance time! You're the overall champion! 🏆",
            Verdict::ComputerReigns => {
                "💻 The computer reigns supreme this time. Try again, mortal! ⚡"
            }
            Verdict::Draw => "🤷 It's a draw! Truly an epic showdown.",
        };
        self.say(line);
    }

    fn display_rps_goodbye(&mut self) {
        self.say(
            "\n👋 Until next time, warrior! Come back when you're ready for battle! ⚔️ 🛡️",
        );
        self.say("Goodbye!");
    }

    fn play_cue(&mut self, cue: Cue) {
        GameInterface::play_cue(self, cue);
    }
}
