//! TUI (Terminal User Interface) for Hangman
//!
//! Full-screen alternative to the line interface, built on Ratatui. It
//! implements the same [`GameInterface`] so the session loop does not know
//! which one it is driving.
//!
//! # Layout
//! Title on top, gallows on the left, word/letters/lives on the right,
//! then a message panel, the input line and key help.
//!
//! Esc or Ctrl-C at any prompt closes input and ends the session.

use crate::error::GuessError;
use crate::guess::GuessResult;
use crate::outcome::Outcome;
use crate::render::{self, Danger, LetterMark};
use crate::round::{Difficulty, RoundState};
use crate::session::{Cue, GameInterface, SessionTally};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, Write};

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LEN: usize = 24;
const GALLOWS_WIDTH: u16 = 22;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Yellow);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const HINT_STYLE: Style = Style::new().fg(Color::Magenta);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    Category,
    Difficulty,
    Guess,
    Replay,
}

impl Prompt {
    fn label(self) -> &'static str {
        match self {
            Self::Category => "Category (Enter = random)",
            Self::Difficulty => "Difficulty: easy/normal/hard/insane (Enter = normal)",
            Self::Guess => "Guess a letter (or type 'hint' once)",
            Self::Replay => "Play again? [Y/n]",
        }
    }
}

/// Result of feeding one key to the input line.
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Pending,
    Submit(String),
    Close,
}

/// Apply a key press to the current input buffer.
fn edit_input(input: &mut String, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let full = input.chars().count() >= MAX_INPUT_LEN;
    match key.code {
        KeyCode::Esc => KeyOutcome::Close,
        KeyCode::Char('c') if ctrl => KeyOutcome::Close,
        KeyCode::Enter => KeyOutcome::Submit(std::mem::take(input)),
        KeyCode::Backspace => {
            input.pop();
            KeyOutcome::Pending
        }
        KeyCode::Char(c) if !ctrl && !alt && !c.is_control() && !full => {
            input.push(c);
            KeyOutcome::Pending
        }
        _ => KeyOutcome::Pending,
    }
}

/// Everything the renderer needs, borrowed from the interface.
struct RenderContext<'a> {
    round: Option<&'a RoundState>,
    category: &'a str,
    categories: &'a [String],
    prompt: Option<Prompt>,
    input: &'a str,
    message: &'a str,
    message_style: Style,
    error_message: &'a str,
    outcome: Option<Outcome>,
    tally: SessionTally,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<RoundState>,
    category: String,
    categories: Vec<String>,
    prompt: Option<Prompt>,
    input: String,
    message: String,
    message_style: Style,
    error_message: String,
    outcome: Option<Outcome>,
    tally: SessionTally,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            round: None,
            category: String::new(),
            categories: Vec::new(),
            prompt: None,
            input: String::new(),
            message: String::new(),
            message_style: MESSAGE_STYLE,
            error_message: String::new(),
            outcome: None,
            tally: SessionTally::default(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            round: self.round.as_ref(),
            category: &self.category,
            categories: &self.categories,
            prompt: self.prompt,
            input: &self.input,
            message: &self.message,
            message_style: self.message_style,
            error_message: &self.error_message,
            outcome: self.outcome,
            tally: self.tally,
        };
        self.terminal.draw(|f| Self::render_static(f, &ctx))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::warn!("TUI draw failed: {e}");
        }
    }

    fn set_message(&mut self, message: impl Into<String>, style: Style) {
        self.message = message.into();
        self.message_style = style;
    }

    /// Block on key events until the player submits a line or closes input.
    fn read_line(&mut self, prompt: Prompt) -> Option<String> {
        self.prompt = Some(prompt);
        self.input.clear();
        let result = loop {
            if let Err(e) = self.draw() {
                log::warn!("TUI draw failed, closing input: {e}");
                break None;
            }
            match self.next_key() {
                Ok(Some(key)) => match edit_input(&mut self.input, key) {
                    KeyOutcome::Pending => {}
                    KeyOutcome::Submit(line) => break Some(line),
                    KeyOutcome::Close => {
                        info_log!("read_line() - input closed by player");
                        break None;
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    log::warn!("TUI input failed, closing input: {e}");
                    break None;
                }
            }
        };
        self.prompt = None;
        self.error_message.clear();
        result
    }

    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only Press, so Release/Repeat on some terminals do not double up
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!("next_key() - {:?}", key);
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - ignoring {:?}", other);
                Ok(None)
            }
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Gallows + board
                Constraint::Length(8), // Messages
                Constraint::Length(3), // Input
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.tally);
        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);
        Self::render_gallows(f, middle[0], ctx.round);
        Self::render_board(f, middle[1], ctx);
        Self::render_messages(f, chunks[2], ctx);
        Self::render_input(f, chunks[3], ctx.prompt, ctx.input);
        Self::render_instructions(f, chunks[4], ctx.prompt);
    }

    fn render_title(f: &mut Frame, area: Rect, tally: SessionTally) {
        let title = format!(
            "HANGMAN    Score: {}/{}",
            tally.games_won, tally.games_played
        );
        let paragraph = Paragraph::new(title)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn danger_color(mistakes: u8) -> Color {
        match render::danger(mistakes) {
            Danger::Safe => Color::Green,
            Danger::Warning => Color::Yellow,
            Danger::Critical => Color::Red,
        }
    }

    fn render_gallows(f: &mut Frame, area: Rect, round: Option<&RoundState>) {
        let mistakes = round.map_or(0, RoundState::mistake_count);
        let art = render::gallows(mistakes).trim_start_matches('\n');
        let paragraph = Paragraph::new(art)
            .style(Style::default().fg(Self::danger_color(mistakes)))
            .block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();
        match ctx.round {
            Some(round) => {
                if !ctx.category.is_empty() {
                    let heading = format!(
                        "Category: {} | Letters: {}",
                        render::title_case(ctx.category),
                        round.secret().len()
                    );
                    lines.push(Line::from(Span::styled(heading, MESSAGE_STYLE)));
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(vec![
                    Span::styled("Word: ", bold),
                    Span::styled(round.masked_word(), MESSAGE_STYLE),
                ]));
                lines.push(Line::from(""));

                let mut letters = vec![Span::styled("Letters: ", bold)];
                for (c, mark) in render::alphabet(round) {
                    let color = match mark {
                        LetterMark::Correct => Color::Green,
                        LetterMark::Wrong => Color::Red,
                        LetterMark::Unused => Color::DarkGray,
                    };
                    letters.push(Span::styled(c.to_string(), Style::default().fg(color)));
                    letters.push(Span::raw(" "));
                }
                lines.push(Line::from(letters));
                lines.push(Line::from(""));

                let (full, empty) = render::lives_bar(round);
                let label = format!("Lives: {}/{} ", round.lives_left(), round.total_lives());
                lines.push(Line::from(vec![
                    Span::styled(label, bold),
                    Span::styled(full, Style::default().fg(Color::Red)),
                    Span::styled(empty, Style::default().fg(Color::DarkGray)),
                ]));
                if round.hint_used() {
                    lines.push(Line::from(Span::styled("Hint used", HINT_STYLE)));
                }
            }
            None => {
                lines.push(Line::from(Span::styled("Categories:", HEADER_STYLE)));
                for name in ctx.categories {
                    lines.push(Line::from(format!("  {name}")));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Difficulty:", HEADER_STYLE)));
                for d in Difficulty::ALL {
                    lines.push(Line::from(format!("  {} ({} lives)", d.name(), d.lives())));
                }
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Board").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_messages(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();
        if let Some(outcome) = ctx.outcome {
            let (text, style) = match outcome {
                Outcome::Won => ("YOU WIN!", SUCCESS_STYLE),
                Outcome::Lost => ("YOU LOSE", FAILURE_STYLE),
                Outcome::Continue => ("", MESSAGE_STYLE),
            };
            let banner = render::big_text(text);
            // Block font only when it fits, otherwise the plain words
            if render::banner_width(&banner) + 2 <= usize::from(area.width) {
                for row in banner {
                    lines.push(Line::from(Span::styled(row, style)));
                }
            } else {
                lines.push(Line::from(Span::styled(text, style)));
            }
        }
        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, ctx.message_style)));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, prompt: Option<Prompt>, input: &str) {
        let title = prompt.map_or("Input", Prompt::label);
        let text = if prompt.is_some() {
            format!("> {input}_")
        } else {
            String::new()
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        f.render_widget(Paragraph::new(text).block(block), area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, prompt: Option<Prompt>) {
        let text = match prompt {
            Some(Prompt::Guess) => "Type a letter or 'hint' | ENTER: Submit | ESC: Quit",
            Some(Prompt::Replay) => "ENTER: Play again | n + ENTER: Stop | ESC: Quit",
            Some(_) => "Type your choice | ENTER: Submit | ESC: Quit",
            None => "Please wait...",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn bell(&mut self) {
        let backend = self.terminal.backend_mut();
        if let Err(e) = write!(backend, "\x07").and_then(|()| backend.flush()) {
            debug_log!("bell() - {}", e);
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self) {
        self.set_message("Welcome to Hangman!", MESSAGE_STYLE);
        self.draw_or_log();
    }

    fn read_category(&mut self, categories: &[&str]) -> Option<String> {
        self.round = None;
        self.outcome = None;
        self.categories = categories.iter().map(|c| (*c).to_string()).collect();
        self.read_line(Prompt::Category)
    }

    fn display_invalid_category(&mut self, input: &str) {
        self.error_message = format!("Invalid category '{input}'. Try again.");
    }

    fn read_difficulty(&mut self) -> Option<String> {
        self.read_line(Prompt::Difficulty)
    }

    fn display_invalid_difficulty(&mut self, input: &str) {
        self.error_message = format!("Invalid difficulty '{input}'. Try again.");
    }

    fn display_round_start(&mut self, category: &str, letters: usize) {
        self.category = category.to_string();
        self.outcome = None;
        let message = format!("New word with {letters} letters. Good luck!");
        self.set_message(message, MESSAGE_STYLE);
    }

    fn render(&mut self, state: &RoundState) {
        self.round = Some(state.clone());
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<String> {
        self.read_line(Prompt::Guess)
    }

    fn display_guess_result(&mut self, result: GuessResult, state: &RoundState) {
        match result {
            GuessResult::Hit(c) => self.set_message(
                format!("Nice! '{}' is in the word.", c.to_ascii_uppercase()),
                SUCCESS_STYLE,
            ),
            GuessResult::Miss(c) => self.set_message(
                format!(
                    "Sorry, '{}' is not in the word. Lives left: {}",
                    c.to_ascii_uppercase(),
                    state.lives_left()
                ),
                FAILURE_STYLE,
            ),
            GuessResult::HintRevealed(c) => self.set_message(
                format!("Hint reveals: '{}'", c.to_ascii_uppercase()),
                HINT_STYLE,
            ),
        }
    }

    fn display_rejection(&mut self, error: GuessError) {
        self.error_message = error.to_string();
    }

    fn display_outcome(&mut self, outcome: Outcome, state: &RoundState) {
        self.outcome = Some(outcome);
        self.round = Some(state.clone());
        match outcome {
            Outcome::Won => self.set_message("You saved him!", SUCCESS_STYLE),
            Outcome::Lost => self.set_message(
                format!("The word was: {}", state.secret().to_uppercase()),
                ERROR_STYLE,
            ),
            Outcome::Continue => {}
        }
        self.draw_or_log();
    }

    fn display_tally(&mut self, tally: &SessionTally) {
        self.tally = *tally;
        self.draw_or_log();
    }

    fn read_replay(&mut self) -> Option<String> {
        self.read_line(Prompt::Replay)
    }

    fn display_farewell(&mut self) {
        self.set_message("Thanks for playing! Bye.", MESSAGE_STYLE);
        self.draw_or_log();
    }

    fn play_cue(&mut self, cue: Cue) {
        debug_log!("play_cue() - {:?}", cue);
        if matches!(cue, Cue::Bad | Cue::Win | Cue::Lose) {
            self.bell();
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
