// Ctrl-C tests for the line interface
// These run the real binary and send it SIGINT while it waits for input

#![cfg(unix)]

use std::io::Read;
use std::process::{Child, Command, Stdio};

fn spawn_game(args: &str) -> Child {
    Command::new(env!("CARGO_BIN_EXE_terminal-games"))
        .args(args.split_whitespace())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

/// Read stdout until `marker` shows up, so the game is known to be blocked on input.
fn read_until(child: &mut Child, marker: &str) -> String {
    let stdout = child.stdout.as_mut().unwrap();
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains(marker) {
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "stdout closed before {marker:?} appeared");
        seen.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&seen).into_owned()
}

fn interrupt_and_collect(mut child: Child) -> (bool, String) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let mut rest = String::new();
    let stdout = child.stdout.as_mut().unwrap();
    stdout.read_to_string(&mut rest).unwrap();
    let exit = child.wait().unwrap();
    (exit.success(), rest)
}

#[test]
fn test_ctrl_c_during_hangman_says_goodbye() {
    let mut child = spawn_game("--plain --seed 1 hangman -c animals -d easy");
    // Held open so the game blocks on the prompt instead of seeing end of input
    let _stdin = child.stdin.take();

    let before = read_until(&mut child, "Guess a letter");
    assert!(before.contains("Category: Animals"));

    let (success, rest) = interrupt_and_collect(child);
    assert!(success);
    assert!(rest.contains("Exiting. Goodbye!"));
    assert!(!rest.contains("Thanks for playing!"));
}

#[test]
fn test_ctrl_c_during_rps_says_goodbye() {
    let mut child = spawn_game("--plain rps");
    let _stdin = child.stdin.take();
    read_until(&mut child, "👉");

    let (success, rest) = interrupt_and_collect(child);
    assert!(success);
    assert!(rest.contains("Exiting. Goodbye!"));
}
