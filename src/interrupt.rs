//! Ctrl-C handling for the line interface.
//!
//! The TUI runs in raw mode, where Ctrl-C arrives as a key event instead of a
//! signal, so only the line games install this.

use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, Stylize};
use std::io::{self, Write};

pub const GOODBYE: &str = "Exiting. Goodbye!";

/// Write the interrupt farewell, putting cursor and colors back first when
/// effects are on.
pub fn write_goodbye<W: Write>(out: &mut W, effects: bool) -> io::Result<()> {
    if effects {
        let line = format!("\n{}\n", GOODBYE.yellow());
        queue!(out, ResetColor, cursor::Show, Print(line))?;
    } else {
        writeln!(out, "\n{GOODBYE}")?;
    }
    out.flush()
}

/// Spawn a thread that waits for SIGINT, says goodbye and exits with status 0.
#[cfg(unix)]
pub fn install(effects: bool) -> io::Result<()> {
    use crate::info_log;
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT])?;
    std::thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            if signals.forever().next().is_some() {
                info_log!("interrupt - SIGINT received");
                if let Err(e) = write_goodbye(&mut io::stdout(), effects) {
                    log::warn!("could not write goodbye: {e}");
                }
                std::process::exit(0);
            }
        })?;
    Ok(())
}

#[cfg(not(unix))]
pub fn install(_effects: bool) -> io::Result<()> {
    Ok(())
}
