//! Tests for the terminal shell, driven through in-memory streams.

use strictly_tictactoe::{Shell, ShellConfig, Tally};

fn run_session(input: &str, config: ShellConfig) -> (Tally, String) {
    let mut shell = Shell::new(input.as_bytes(), Vec::new(), config);
    let tally = shell.run().expect("Session runs");
    let output = String::from_utf8(shell.into_output()).expect("UTF-8 output");
    (tally, output)
}

#[test]
fn test_computer_answers_first_move() {
    let (tally, output) = run_session("1\n", ShellConfig::default());

    assert!(output.contains("Computer plays Center."));
    assert!(output.contains(" X | 2 | 3 \n"));
    assert!(output.contains(" 4 | O | 6 \n"));
    assert_eq!(tally.games(), 0);
    assert!(output.ends_with("Final score: Player 0, Computer 0, Draws 0\n"));
}

#[test]
fn test_player_never_wins_full_game() {
    let (tally, output) = run_session("1\n2\n3\n4\n5\n6\n7\n8\n9\n", ShellConfig::default());

    assert_eq!(tally.games(), 1);
    assert_eq!(*tally.player_wins(), 0);
    assert!(!output.contains("Player wins!"));
    assert!(output.contains("Play again? [y/N]: "));
}

#[test]
fn test_rematch_counts_both_games() {
    // Forced line: every computer reply is a block, ending in a draw.
    let game = "1\n2\n7\n6\n9\n";
    let input = format!("{game}y\n{game}n\n");

    let (tally, output) = run_session(&input, ShellConfig::default());

    assert_eq!(*tally.draws(), 2);
    assert_eq!(tally.games(), 2);
    assert_eq!(output.matches("It's a draw!").count(), 2);
    assert!(output.ends_with("Final score: Player 0, Computer 0, Draws 2\n"));
}

#[test]
fn test_quit_ends_session() {
    let (tally, output) = run_session("5\nquit\n9\n", ShellConfig::default());

    assert_eq!(tally, Tally::default());
    assert_eq!(output.matches("Computer plays").count(), 1);
    assert!(!output.contains("Play again?"));
}

#[test]
fn test_unrecognized_input_is_reported() {
    let (_, output) = run_session("hello\nq\n", ShellConfig::default());
    assert!(output.contains("Unrecognized cell \"hello\""));
}

#[test]
fn test_taken_cell_is_reported() {
    let (_, output) = run_session("5\n5\nq\n", ShellConfig::default());
    assert!(output.contains("Center is already taken."));
    assert_eq!(output.matches("Computer plays").count(), 1);
}

#[test]
fn test_custom_symbols() {
    let config = ShellConfig::with_symbols('@', '#').unwrap();
    let (_, output) = run_session("5\n", config);

    assert!(output.contains(" # | 2 | 3 \n"));
    assert!(output.contains(" 4 | @ | 6 \n"));
    assert!(!output.contains(" X "));
}

#[test]
fn test_silent_computer() {
    let config = ShellConfig::from_toml("announce_computer_moves = false").unwrap();
    let (_, output) = run_session("5\n", config);

    assert!(!output.contains("Computer plays"));
    assert!(output.contains(" O | 2 | 3 \n"));
}
