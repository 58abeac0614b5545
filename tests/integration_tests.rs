// Integration tests for terminal-games
// These drive the public API end to end with scripted input and randomness

use std::io::Cursor;
use terminal_games::cli::CliInterface;
use terminal_games::rps;
use terminal_games::*;

fn hangman_session(
    bank_data: &str,
    script: Vec<usize>,
    options: SessionOptions,
    input: &str,
) -> (SessionTally, String) {
    let bank = load_wordbank_from_str(bank_data);
    let mut session = Session::new(bank, ScriptedRng::new(script), options).unwrap();
    let mut ui = CliInterface::new(Cursor::new(input.to_string()), Vec::new());
    let tally = session.run(&mut ui).unwrap();
    (tally, String::from_utf8(ui.into_output()).unwrap())
}

#[test]
fn test_round_lost_after_running_out_of_lives() {
    let mut rng = ScriptedRng::default();
    let mut round = RoundState::new("cat", 2).unwrap();

    let result = apply_guess(&mut round, "c", &mut rng);
    assert_eq!(result, Ok(GuessResult::Hit('c')));
    assert_eq!(round.lives_left(), 2);
    assert_eq!(evaluate(&round), Outcome::Continue);

    let result = apply_guess(&mut round, "z", &mut rng);
    assert_eq!(result, Ok(GuessResult::Miss('z')));
    assert_eq!(round.lives_left(), 1);

    let result = apply_guess(&mut round, "X", &mut rng);
    assert_eq!(result, Ok(GuessResult::Miss('x')));
    assert_eq!(round.lives_left(), 0);
    assert_eq!(evaluate(&round), Outcome::Lost);
}

#[test]
fn test_round_won_keeps_all_lives() {
    let mut rng = ScriptedRng::default();
    let mut round = RoundState::new("dog", 6).unwrap();
    for letter in ["d", "o", "g"] {
        assert!(apply_guess(&mut round, letter, &mut rng).unwrap().is_hit());
    }
    assert_eq!(evaluate(&round), Outcome::Won);
    assert_eq!(round.lives_left(), 6);
}

#[test]
fn test_hint_once_per_round() {
    // Unrevealed letters are offered in alphabetical order: l, o, w
    let mut rng = ScriptedRng::new(vec![2]);
    let mut round = RoundState::new("owl", 6).unwrap();

    let result = apply_guess(&mut round, "hint", &mut rng);
    assert_eq!(result, Ok(GuessResult::HintRevealed('w')));
    assert!(round.hint_used());
    assert_eq!(round.masked_word(), "_ w _");

    let before = round.clone();
    assert_eq!(
        apply_guess(&mut round, "HINT", &mut rng),
        Err(GuessError::HintExhausted)
    );
    assert_eq!(round, before);
}

#[test]
fn test_duplicate_guess_rejected() {
    let mut rng = ScriptedRng::default();
    let mut round = RoundState::new("owl", 6).unwrap();
    apply_guess(&mut round, "o", &mut rng).unwrap();
    assert_eq!(
        apply_guess(&mut round, "o", &mut rng),
        Err(GuessError::DuplicateGuess)
    );
    assert_eq!(round.guessed_letters().len(), 1);
}

#[test]
fn test_hint_on_revealed_word_is_not_spent() {
    let mut rng = ScriptedRng::default();
    let mut round = RoundState::new("ox", 6).unwrap();
    apply_guess(&mut round, "o", &mut rng).unwrap();
    apply_guess(&mut round, "x", &mut rng).unwrap();
    assert_eq!(
        apply_guess(&mut round, "hint", &mut rng),
        Err(GuessError::NoHintAvailable)
    );
    assert!(!round.hint_used());
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_full_session_two_rounds_through_cli() {
    // Round 1: random category (index 1 = birds), word index 0 = owl.
    // Round 2: category pets, word index 1 = dog, lost on insane.
    let bank = "[pets]\ncat\ndog\n[birds]\nowl\njay\n";
    let input = "\n\no\nw\nl\ny\npets\ninsane\na\nb\nc\ne\nn\n";
    let (tally, output) = hangman_session(bank, vec![1, 0, 1], SessionOptions::default(), input);

    assert_eq!((tally.games_played, tally.games_won), (2, 1));
    assert!(output.contains("Category: Birds | Letters: 3"));
    assert!(output.contains("Word: o w l"));
    assert!(output.contains("Score: 1/1"));
    assert!(output.contains("Category: Pets | Letters: 3"));
    assert!(output.contains("The word was: DOG"));
    assert!(output.contains("Score: 1/2"));
    assert!(output.trim_end().ends_with("Thanks for playing! Bye."));
}

#[test]
fn test_session_with_preset_options_skips_prompts() {
    let options = SessionOptions {
        category: Some("Tech".to_string()),
        difficulty: Some(Difficulty::Hard),
    };
    let (tally, output) = hangman_session("[tech]\nrust\n", vec![0], options, "r\nu\ns\nt\nno\n");
    assert_eq!((tally.games_played, tally.games_won), (1, 1));
    assert!(!output.contains("Categories:"));
    assert!(!output.contains("Pick difficulty"));
    assert!(output.contains("Lives: 5/5"));
    assert!(output.contains("YOU WIN!"));
}

#[test]
fn test_session_rejects_unknown_preset_category() {
    let options = SessionOptions {
        category: Some("planets".to_string()),
        difficulty: None,
    };
    let result = Session::new(WordBank::embedded(), ScriptedRng::default(), options);
    let Err(GameError::UnknownCategory(name)) = result else {
        panic!("expected an unknown category error");
    };
    assert_eq!(name, "planets");
}

#[test]
fn test_session_rejects_empty_wordbank() {
    let bank = load_wordbank_from_str("# nothing here\n[empty]\n");
    let result = Session::new(bank, ScriptedRng::default(), SessionOptions::default());
    assert!(matches!(result, Err(GameError::EmptyWordBank)));
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let play = |seed| {
        let bank = WordBank::embedded();
        let mut rng = GameRng::new(seed);
        let category = bank.random_category(&mut rng).unwrap();
        let word = category.pick_word(&mut rng).unwrap().to_string();
        let mut round = RoundState::new(&word, Difficulty::Normal.lives()).unwrap();
        let hint = apply_guess(&mut round, "hint", &mut rng).unwrap();
        (category.name().to_string(), word, hint)
    };
    assert_eq!(play(7), play(7));
}

#[test]
fn test_rps_session_through_cli() {
    // Computer plays rock (0), paper (1); comment picks are index 0
    let mut rng = ScriptedRng::new(vec![0, 0, 1, 0]);
    let mut ui = CliInterface::new(Cursor::new("paper\ny\nrock\nn\n"), Vec::new());
    let board = rps::play_session(&mut rng, &mut ui);
    let output = String::from_utf8(ui.into_output()).unwrap();

    assert_eq!((board.human, board.computer, board.rounds), (1, 1, 2));
    assert!(output.contains("Computer chose: rock"));
    assert!(output.contains("Computer chose: paper"));
    assert!(output.contains("Final Score - You: 1 | Computer: 1"));
    assert!(output.contains("Goodbye!"));
}
