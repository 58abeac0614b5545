//! Terminal-independent pieces of the Hangman display: gallows art, the
//! alphabet board, the lives bar and the block-font banners. Both the line
//! CLI and the TUI draw from here and only add color.

use crate::round::RoundState;

pub const GALLOWS_STAGES: [&str; 7] = [
    r"
     +---+
     |   |
         |
         |
         |
         |
   =========",
    r"
     +---+
     |   |
     O   |
         |
         |
         |
   =========",
    r"
     +---+
     |   |
     O   |
     |   |
         |
         |
   =========",
    r"
     +---+
     |   |
     O   |
    /|   |
         |
         |
   =========",
    r"
     +---+
     |   |
     O   |
    /|\  |
         |
         |
   =========",
    r"
     +---+
     |   |
     O   |
    /|\  |
    /    |
         |
   =========",
    r"
     +---+
     |   |
     O   |
    /|\  |
    / \  |
         |
   =========",
];

/// Gallows stage for a mistake count, clamped to the last stage.
pub fn gallows(mistakes: u8) -> &'static str {
    GALLOWS_STAGES[usize::from(mistakes).min(GALLOWS_STAGES.len() - 1)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Danger {
    Safe,
    Warning,
    Critical,
}

pub fn danger(mistakes: u8) -> Danger {
    match mistakes {
        0..=2 => Danger::Safe,
        3..=4 => Danger::Warning,
        _ => Danger::Critical,
    }
}

/// How a letter of the alphabet board is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMark {
    Correct,
    Wrong,
    Unused,
}

/// A-Z (uppercase) with each letter's mark for this round.
pub fn alphabet(state: &RoundState) -> Vec<(char, LetterMark)> {
    ('a'..='z')
        .map(|c| {
            let mark = match (state.has_guessed(c), state.contains(c)) {
                (true, true) => LetterMark::Correct,
                (true, false) => LetterMark::Wrong,
                (false, _) => LetterMark::Unused,
            };
            (c.to_ascii_uppercase(), mark)
        })
        .collect()
}

pub const HEART_FULL: char = '♥';
pub const HEART_EMPTY: char = '♡';

/// Full hearts for lives left, hollow ones for lives lost.
pub fn lives_bar(state: &RoundState) -> (String, String) {
    let left = usize::from(state.lives_left());
    let lost = usize::from(state.mistake_count());
    let full = HEART_FULL.to_string().repeat(left);
    let empty = HEART_EMPTY.to_string().repeat(lost);
    (full, empty)
}

const GLYPH_ROWS: usize = 5;

fn glyph(c: char) -> [&'static str; GLYPH_ROWS] {
    match c {
        'A' => [" █████ ", "██   ██", "███████", "██   ██", "██   ██"],
        'E' => ["██████ ", "██     ", "█████  ", "██     ", "██████ "],
        'G' => [" █████ ", "██     ", "██  ███", "██   ██", " █████ "],
        'H' => ["██   ██", "██   ██", "███████", "██   ██", "██   ██"],
        'I' => [" █████ ", "   ██  ", "   ██  ", "   ██  ", " █████ "],
        'L' => ["██     ", "██     ", "██     ", "██     ", "██████ "],
        'M' => ["███ ███", "██ █ ██", "██   ██", "██   ██", "██   ██"],
        'N' => ["██   ██", "███  ██", "██ █ ██", "██  ███", "██   ██"],
        'O' => [" █████ ", "██   ██", "██   ██", "██   ██", " █████ "],
        'S' => [" █████ ", "██     ", " █████ ", "     ██", " █████ "],
        'U' => ["██   ██", "██   ██", "██   ██", "██   ██", " █████ "],
        'W' => [
            "██     ██",
            "██  █  ██",
            "██  █  ██",
            "██ ███ ██",
            " ███ ███ ",
        ],
        'Y' => ["██   ██", " ██ ██ ", "  ███  ", "  ███  ", "  ███  "],
        '!' => ["  ██  ", "  ██  ", "  ██  ", "      ", "  ██  "],
        _ => ["  "; GLYPH_ROWS],
    }
}

/// Five rows of block-font text. Unknown characters render as blanks.
pub fn big_text(message: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_ROWS];
    for c in message.to_uppercase().chars() {
        for (row, part) in rows.iter_mut().zip(glyph(c)) {
            row.push_str(part);
            row.push_str("  ");
        }
    }
    rows
}

/// Display width of a block-font banner, counted in chars.
pub fn banner_width(rows: &[String]) -> usize {
    rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
}

pub const WIN_BOX: &str = "+--------------------------------+\n\
                           |            YOU WIN!            |\n\
                           +--------------------------------+";
pub const LOSE_BOX: &str = "+--------------------------------+\n\
                            |            YOU LOSE            |\n\
                            +--------------------------------+";

/// Capitalise the first letter of a category name.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
