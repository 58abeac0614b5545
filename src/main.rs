use anyhow::{Context, Result};
use std::io;
use terminal_games::cli::{CliInterface, Command, HangmanArgs, parse_cli};
use terminal_games::rng::GameRng;
use terminal_games::session::{Session, SessionOptions};
use terminal_games::tui::TuiInterface;
use terminal_games::wordbank::WordBank;
use terminal_games::{info_log, interrupt, logging, rps};

fn main() -> Result<()> {
    logging::init();
    let cli = parse_cli();

    let mut rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("random seed {}", rng.seed());

    match cli.command() {
        Command::Hangman(args) => run_hangman(args, rng, cli.plain),
        Command::Rps => {
            install_interrupt(cli.plain);
            let stdin = io::stdin();
            let mut ui = line_interface(stdin.lock(), cli.plain);
            let board = rps::play_session(&mut rng, &mut ui);
            info_log!("main() - rps finished after {} rounds", board.rounds);
            Ok(())
        }
    }
}

fn line_interface<R: io::BufRead>(reader: R, plain: bool) -> CliInterface<R, io::Stdout> {
    let ui = CliInterface::new(reader, io::stdout());
    if plain { ui } else { ui.with_effects() }
}

fn install_interrupt(plain: bool) {
    if let Err(e) = interrupt::install(!plain) {
        log::warn!("Ctrl-C handler not installed: {e}");
    }
}

fn run_hangman(args: HangmanArgs, rng: GameRng, plain: bool) -> Result<()> {
    let options = SessionOptions {
        category: args.category,
        difficulty: args.difficulty,
    };
    let mut session = Session::new(WordBank::embedded(), rng, options)
        .context("could not start hangman")?;

    let tally = if args.tui {
        let mut ui = TuiInterface::new()
            .context("could not initialise the terminal UI")?;
        let tally = session.run(&mut ui);
        ui.cleanup().context("could not restore the terminal")?;
        tally?
    } else {
        install_interrupt(plain);
        let stdin = io::stdin();
        let mut ui = line_interface(stdin.lock(), plain);
        session.run(&mut ui)?
    };
    info_log!(
        "main() - hangman finished {}/{}",
        tally.games_won,
        tally.games_played
    );
    Ok(())
}
